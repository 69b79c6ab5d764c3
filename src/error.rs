#[derive(Debug, thiserror::Error)]
pub enum AperturaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate token id: {0}")]
    DuplicateToken(u32),

    #[error("Negative stock for token {id}: {stock}")]
    NegativeStock { id: u32, stock: i64 },

    #[error("Unknown rarity label: '{0}'")]
    UnknownRarity(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, AperturaError>;
