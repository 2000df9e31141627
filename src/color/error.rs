//! Color parsing errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unknown display color '{0}'. Expected one of: Green, Red, Blue")]
    Unknown(String),
}
