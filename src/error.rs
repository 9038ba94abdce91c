use thiserror::Error;

/// Errors raised while parsing user-supplied case settings.
///
/// The conversions themselves never fail; these only come from the edges
/// (configuration files and command-line arguments).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("delimiter must be a single character, got {0:?}")]
    InvalidDelimiter(String),

    #[error("unknown case style: {0}")]
    UnknownStyle(String),
}
