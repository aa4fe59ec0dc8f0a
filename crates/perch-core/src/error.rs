pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown tooltip position: {name}")]
    UnknownPosition { name: String },

    #[error("unknown tooltip trigger: {name} (expected Hover or Click)")]
    UnknownTrigger { name: String },

    #[error("unknown tooltip type: {name} (expected Default or Popup)")]
    UnknownVariant { name: String },

    #[error("invalid geometry ({field}): {message}")]
    InvalidGeometry { field: &'static str, message: String },

    #[error("tooltip props JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
