use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `proxyconf_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while resolving a proxy.
pub struct Error {
    pub(crate) inner: Box<Inner>,
}

pub(crate) struct Inner {
    pub(crate) kind: Kind,
    pub(crate) source: Option<Box<dyn StdError + Send + Sync>>,
    pub(crate) url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The URL handed to resolution could not be parsed
    InvalidUrl,
    /// A proxy or bypass entry had nothing usable in it
    InvalidEntry,
    /// The system proxy backend failed
    Backend,
    /// Resolver configuration failed to load or validate
    Configuration,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                url: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_url(mut self, url: impl Into<String>) -> Error {
        self.inner.url = Some(url.into());
        self
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// The URL (as given by the caller) this error is about, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.inner.url.as_deref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("proxyconf::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", url);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::InvalidUrl => f.write_str("invalid URL")?,
            Kind::InvalidEntry => f.write_str("invalid proxy entry")?,
            Kind::Backend => f.write_str("system proxy backend error")?,
            Kind::Configuration => f.write_str("invalid resolver configuration")?,
        }

        if let Some(ref url) = self.inner.url {
            write!(f, " for {url}")?;
        }

        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
