use thiserror::Error;

/// Errors raised while building a page model or loading configuration.
///
/// Navigation and extraction queries never return these; they resolve
/// unparseable input to a default or an absent value instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The host handed over a location that is not an absolute URL
    #[error("invalid page location: {0}")]
    InvalidLocation(#[from] url::ParseError),

    /// Reading a file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be decoded
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
