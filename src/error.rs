use thiserror::Error;

/// Errors reported when constructing a filter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
