pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{DirectEntry, EmptyEntry, EmptyHost, UrlUnsafeHost};
pub use types::{Error, Kind, Result};
