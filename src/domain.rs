/// Category definitions and URL classification for Chat Marks
use serde::{Deserialize, Serialize};
use url::Url;

/// One of the fixed AI-chat sites a bookmark can belong to.
///
/// Variant order is the display order used everywhere results are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    ChatGpt,
    Claude,
    Mistral,
    Gemini,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::ChatGpt,
        Category::Claude,
        Category::Mistral,
        Category::Gemini,
    ];

    /// Key under which this category's bookmark list is persisted
    pub fn storage_key(self) -> &'static str {
        match self {
            Category::ChatGpt => "chatgpt_bookmarks",
            Category::Claude => "claude_bookmarks",
            Category::Mistral => "mistral_bookmarks",
            Category::Gemini => "gemini_bookmarks",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::ChatGpt => "ChatGPT",
            Category::Claude => "Claude",
            Category::Mistral => "Le Chat",
            Category::Gemini => "Gemini",
        }
    }
}

/// Hostnames we know how to bookmark. Matching is exact: subdomains are not folded.
const DOMAIN_MAP: &[(&str, Category)] = &[
    ("chatgpt.com", Category::ChatGpt),
    ("chat.openai.com", Category::ChatGpt),
    ("claude.ai", Category::Claude),
    ("chat.mistral.ai", Category::Mistral),
    ("gemini.google.com", Category::Gemini),
];

/// Look up a bare hostname in the domain map
pub fn category_for_host(host: &str) -> Option<Category> {
    DOMAIN_MAP
        .iter()
        .find(|(known, _)| *known == host)
        .map(|(_, category)| *category)
}

/// Classify a URL into its category.
///
/// Returns `None` when the string is not an absolute URL, has no host,
/// or the host is not one of the supported chat sites.
pub fn classify(url: &str) -> Option<Category> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed.host_str().and_then(category_for_host)
}
