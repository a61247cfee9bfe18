//! Process-wide system backend handle
//!
//! The handle is created at most once, either by an explicit `install` or
//! lazily on first use. Both paths go through the same `OnceLock`, so
//! concurrent first calls agree on one backend.

use std::sync::{Arc, OnceLock};

use super::{NoSystemProxy, SystemProxyBackend};

static SYSTEM_BACKEND: OnceLock<Arc<dyn SystemProxyBackend>> = OnceLock::new();

/// Install the process-wide backend.
///
/// Returns `false`, leaving the existing backend in place, if one was already
/// installed or lazily created.
pub fn install(backend: Arc<dyn SystemProxyBackend>) -> bool {
    let installed = SYSTEM_BACKEND.set(backend).is_ok();
    if !installed {
        tracing::warn!(
            target: "proxyconf::proxy",
            "System proxy backend already initialized; keeping the existing one"
        );
    }
    installed
}

/// Whether the process-wide backend has been created yet.
#[must_use]
pub fn is_installed() -> bool {
    SYSTEM_BACKEND.get().is_some()
}

/// The process-wide backend, initialising it to `NoSystemProxy` if nothing
/// was installed.
#[must_use]
pub fn shared() -> Arc<dyn SystemProxyBackend> {
    Arc::clone(SYSTEM_BACKEND.get_or_init(|| {
        tracing::debug!(
            target: "proxyconf::proxy",
            "No system proxy backend installed; system lookups resolve to direct"
        );
        Arc::new(NoSystemProxy)
    }))
}
