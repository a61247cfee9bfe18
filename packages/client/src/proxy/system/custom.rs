use std::fmt;
use std::sync::Arc;

use super::SystemProxyBackend;
use crate::Url;
use crate::error::Result;

/// Custom candidate function used as a system backend
#[derive(Clone)]
pub struct FnBackend {
    func: Arc<dyn Fn(&Url) -> Result<Vec<String>> + Send + Sync + 'static>,
}

impl FnBackend {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Url) -> Result<Vec<String>> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }
}

impl SystemProxyBackend for FnBackend {
    fn candidates(&self, url: &Url) -> Result<Vec<String>> {
        (self.func)(url)
    }
}

impl fmt::Debug for FnBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBackend")
            .field("func", &"<backend function>")
            .finish()
    }
}
