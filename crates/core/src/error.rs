#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read page file: {0}")]
    FileRead(std::io::Error),
    #[error("notion error: {0}")]
    Notion(#[from] notion::NotionError),
}

pub type PageResult<T> = std::result::Result<T, PageError>;
