//! Core proxy types
//!
//! This module contains the resolved proxy endpoint (`ProxyDescriptor`), its
//! connection type, and the schemes that can carry an explicit override.

use std::fmt;
use std::str::FromStr;

use http::header::HeaderValue;
use serde::{Deserialize, Serialize};

use super::entry::parse_proxy_entry;
use crate::Url;
use crate::error::{self, DirectEntry, EmptyHost, Result, UrlUnsafeHost};

/// How the client talks to the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    #[default]
    Http,
    Https,
    Ftp,
    Socks,
}

impl ProxyType {
    /// Map a scheme name to a proxy type.
    ///
    /// Matching ignores case and surrounding whitespace. Only the exact names
    /// `https`, `ftp` and `socks` are recognised; anything else, `socks5`
    /// included, is treated as an HTTP proxy.
    #[must_use]
    pub fn from_scheme(scheme: &str) -> Self {
        let scheme = scheme.trim().to_ascii_lowercase();
        match scheme.as_str() {
            "https" => ProxyType::Https,
            "ftp" => ProxyType::Ftp,
            "socks" => ProxyType::Socks,
            _ => ProxyType::Http,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Ftp => "ftp",
            ProxyType::Socks => "socks",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved proxy endpoint.
///
/// Once built a descriptor never changes; "no proxy" is expressed by the
/// absence of a descriptor (`Option::None`), never by a special value.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProxyDescriptor {
    #[serde(rename = "type")]
    proxy_type: ProxyType,
    host: String,
    port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip)]
    password: Option<String>,
}

impl ProxyDescriptor {
    /// Create a descriptor for `host`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidEntry` error when `host` is empty after trimming.
    pub fn new(proxy_type: ProxyType, host: &str) -> Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(error::invalid_entry(EmptyHost));
        }

        Ok(Self {
            proxy_type,
            host: host.to_string(),
            port: 0,
            username: None,
            password: None,
        })
    }

    /// Set the port; `0` means unspecified.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Attach credentials. Empty strings count as absent.
    #[must_use]
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = non_empty(username);
        self.password = non_empty(password);
        self
    }

    #[must_use]
    pub fn proxy_type(&self) -> ProxyType {
        self.proxy_type
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port, or `0` when none was given.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    #[must_use]
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() || self.password.is_some()
    }

    /// Convert into a `Url` suitable for handing to a connector.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidEntry` error if the host cannot be expressed in a URL,
    /// including hosts such as `ret@host` that a URL parser would read as
    /// userinfo or path.
    pub fn to_url(&self) -> Result<Url> {
        if self.host.contains(['@', '/', '?', '#', '\\']) {
            return Err(error::invalid_entry(UrlUnsafeHost));
        }

        let mut url = Url::parse(&format!("{}://{}", self.proxy_type, self.host))
            .map_err(error::invalid_entry)?;

        if self.port != 0 {
            url.set_port(Some(self.port))
                .map_err(|()| error::invalid_entry("proxy URL cannot carry a port"))?;
        }

        if self.has_credentials() {
            url_auth(
                &mut url,
                self.username().unwrap_or(""),
                self.password().unwrap_or(""),
            );
        }

        Ok(url)
    }

    /// A `Proxy-Authorization` header carrying Basic credentials, if this
    /// descriptor has any.
    #[must_use]
    pub fn proxy_authorization(&self) -> Option<HeaderValue> {
        if !self.has_credentials() {
            return None;
        }
        Some(encode_basic_auth(
            self.username().unwrap_or(""),
            self.password().unwrap_or(""),
        ))
    }
}

impl fmt::Display for ProxyDescriptor {
    /// Canonical form: `scheme://[user:password@]host[:port]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.proxy_type)?;

        if self.has_credentials() {
            write!(
                f,
                "{}:{}@",
                self.username().unwrap_or(""),
                self.password().unwrap_or("")
            )?;
        }

        f.write_str(&self.host)?;

        if self.port != 0 {
            write!(f, ":{}", self.port)?;
        }

        Ok(())
    }
}

impl fmt::Debug for ProxyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyDescriptor")
            .field("type", &self.proxy_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl FromStr for ProxyDescriptor {
    type Err = error::Error;

    /// Parse a single entry, defaulting to HTTP when it names no scheme.
    fn from_str(s: &str) -> Result<Self> {
        parse_proxy_entry(s, "http", "")?.ok_or_else(|| error::invalid_entry(DirectEntry))
    }
}

/// The schemes that can carry an explicit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideScheme {
    Http,
    Https,
}

impl OverrideScheme {
    /// The override slot consulted for a request URL scheme, if any.
    #[must_use]
    pub fn from_url_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(OverrideScheme::Http),
            "https" => Some(OverrideScheme::Https),
            _ => None,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Set username and password for proxy URL authentication
fn url_auth(url: &mut Url, username: &str, password: &str) {
    if url.set_username(username).is_err() {
        tracing::warn!(
            target: "proxyconf::proxy",
            username = %username,
            "Failed to set proxy username"
        );
    }
    if url.set_password(Some(password)).is_err() {
        tracing::warn!(
            target: "proxyconf::proxy",
            "Failed to set proxy password"
        );
    }
}

/// Encode basic authentication credentials into a `HeaderValue`
fn encode_basic_auth(username: &str, password: &str) -> HeaderValue {
    use base64::Engine;
    let credentials = format!("{username}:{password}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    let auth_value = format!("Basic {encoded}");

    let mut header =
        HeaderValue::from_str(&auth_value).unwrap_or_else(|_| HeaderValue::from_static(""));
    header.set_sensitive(true);
    header
}
