#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("row {row} is out of range for a graph with {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("invalid generator options: {message}")]
    InvalidOptions { message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
