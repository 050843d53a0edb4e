#[derive(Debug, thiserror::Error)]
pub enum NamerError {
    #[error("Unexpected trace {type_name}")]
    UnclassifiableSource { type_name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NamerError>;
