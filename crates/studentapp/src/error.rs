use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudentError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("A student with ID '{0}' already exists")]
    DuplicateId(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StudentError>;
