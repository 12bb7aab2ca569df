use thiserror::Error;

/// Failures a record fetch can surface to the controller.
///
/// Both kinds are handled identically at the view boundary: the controller
/// shows the carried description inline and leaves its state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;
