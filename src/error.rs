use thiserror::Error;

/// Failures from the host environment. None of these reach the user; the
/// store adapter and the tab helper log them and carry on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopupError {
    #[error("storage read failed for {key}: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("storage write failed for {key}: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("stored value under {key} is not a bookmark list: {reason}")]
    Decode { key: String, reason: String },

    #[error("could not encode bookmarks for {key}: {reason}")]
    Encode { key: String, reason: String },

    #[error("active tab query failed: {0}")]
    TabQuery(String),
}

pub type Result<T> = std::result::Result<T, PopupError>;
