use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("match results do not align with dataset: {records} records, {results} results")]
    ResultMismatch { records: usize, results: usize },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, MapperError>;
