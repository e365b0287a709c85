/// Data structures for Chat Marks
use serde::{Deserialize, Serialize};

/// A saved URL within one category. The URL is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Bookmark {
        Bookmark {
            url: url.into(),
            description: description.into(),
        }
    }
}
