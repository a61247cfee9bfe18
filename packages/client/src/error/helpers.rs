use std::fmt;

/// A marker type to indicate that an entry had no host left after parsing.
#[derive(Debug)]
pub struct EmptyHost;

impl fmt::Display for EmptyHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("empty host")
    }
}

impl std::error::Error for EmptyHost {}

/// A marker type to indicate that an entry was blank.
#[derive(Debug)]
pub struct EmptyEntry;

impl fmt::Display for EmptyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("empty entry")
    }
}

impl std::error::Error for EmptyEntry {}

/// A marker type to indicate that a `direct` entry was used where a proxy is required.
#[derive(Debug)]
pub struct DirectEntry;

impl fmt::Display for DirectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("entry means a direct connection, not a proxy")
    }
}

impl std::error::Error for DirectEntry {}

/// A marker type to indicate that a host contains URL delimiters and cannot be
/// placed in a URL unchanged.
#[derive(Debug)]
pub struct UrlUnsafeHost;

impl fmt::Display for UrlUnsafeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("host contains URL delimiters")
    }
}

impl std::error::Error for UrlUnsafeHost {}
