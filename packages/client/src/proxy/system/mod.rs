//! System proxy detection
//!
//! The OS-level lookup is an opaque collaborator: given a URL it returns
//! candidate proxy strings in preference order, or nothing for a direct
//! connection. `libproxy`-style backends return strings such as
//! `http://proxy:8080` or `direct://`.

use crate::Url;
use crate::error::Result;

mod custom;
mod shared;
mod static_list;

pub use custom::FnBackend;
pub use shared::{install, is_installed, shared};
pub use static_list::StaticProxyList;

/// Source of system proxy settings.
///
/// Implementations may block (reading system settings, fetching a PAC
/// script); the resolver never holds a lock while calling them.
pub trait SystemProxyBackend: Send + Sync {
    /// Candidate proxy entries for `url`, most preferred first.
    ///
    /// # Errors
    ///
    /// Implementations return a `Backend` error when the system settings
    /// cannot be read. Callers treat that as a direct connection.
    fn candidates(&self, url: &Url) -> Result<Vec<String>>;
}

/// A backend that never reports a proxy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSystemProxy;

impl SystemProxyBackend for NoSystemProxy {
    fn candidates(&self, _url: &Url) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
