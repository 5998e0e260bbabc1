use lom_codec::CodecError;
use lom_path::PathError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LomError {
    /// The input is neither a numeric id, an `("id", N)` pair nor a path.
    #[error("invalid identifier: {0}")]
    InvalidIdentifierKind(String),
    #[error("malformed encoded value: {0}")]
    MalformedEncodedValue(#[from] CodecError),
    #[error("malformed path: {0}")]
    Path(#[from] PathError),
}
