use super::types::{Error, Kind};

impl Error {
    /// Returns true if the URL given to resolution was not a valid URL.
    #[must_use]
    pub fn is_invalid_url(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidUrl)
    }

    /// Returns true if a proxy or bypass entry was unusable.
    #[must_use]
    pub fn is_invalid_entry(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidEntry)
    }

    /// Returns true if the system proxy backend failed.
    #[must_use]
    pub fn is_backend(&self) -> bool {
        matches!(self.inner.kind, Kind::Backend)
    }

    /// Returns true if the resolver configuration was rejected.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self.inner.kind, Kind::Configuration)
    }
}
