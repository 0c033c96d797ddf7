use thiserror::Error;

/// Formatter failures. The operator vocabulary is a closed enum, so an
/// unknown tag cannot exist at runtime; what remains are tree shapes the
/// builder permits but the language cannot express.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ExpError {
    #[error("unsupported node: {0}")]
    UnsupportedNode(String),
}

pub type ExpResult<T> = Result<T, ExpError>;
