use super::types::{Error, Kind};

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Creates an `Error` for a URL that could not be parsed.
pub fn invalid_url<E: Into<BoxError>>(e: E, url: &str) -> Error {
    Error::new(Kind::InvalidUrl).with(e.into()).with_url(url)
}

/// Creates an `Error` for an entry that has no usable content.
pub fn invalid_entry<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidEntry).with(e.into())
}

/// Creates an `Error` for a failing system backend.
pub fn backend<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Backend).with(e.into())
}

/// Creates an `Error` for a configuration problem.
pub fn configuration<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Configuration).with(e.into())
}
