use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Not a valid pattern: {0:?}")]
    InvalidPattern(String),
    #[error("Unknown key or button name: {0:?}")]
    UnknownSymbol(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unknown handler kind: {0}")]
    UnknownKind(String),
    #[error("Invalid value {value:?} for handler parameter '{name}'")]
    InvalidParam { name: String, value: String },
    #[error("Command template error: {0}")]
    Template(String),
    #[error("Handler failed: {0}")]
    Failed(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
