use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipError {
    #[error("unknown pharmaceutical form: {0}")]
    UnknownForm(String),
    #[error("unknown identifier column: {0}")]
    UnknownIdentifier(String),
}

pub type Result<T> = std::result::Result<T, CipError>;
