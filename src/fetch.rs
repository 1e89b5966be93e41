//! Fetching board resources.
//!
//! The board client never talks to the network or the filesystem directly; it
//! asks a [`Fetch`] implementation for the text behind a URL it resolved with
//! [`crate::paths::PathResolver`]. Two implementations ship with the crate:
//!
//! - [`HttpFetcher`] fetches from a deployed site over HTTP(S), always
//!   revalidating (`Cache-Control: no-cache`).
//! - [`DirFetcher`] serves a local checkout of the site, mapping URL paths
//!   under the base path onto files under the site root. Missing files behave
//!   like an HTTP 404.

use percent_encoding::percent_decode_str;
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    fn not_found(url: &str) -> Self {
        FetchError::Status {
            status: 404,
            url: url.to_string(),
        }
    }

    fn network(url: &str, message: impl ToString) -> Self {
        FetchError::Network {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

/// Retrieves the text body behind a resolved URL.
pub trait Fetch {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches over HTTP(S), resolving site-relative URLs against `origin`.
pub struct HttpFetcher {
    origin: Url,
    client: Client,
}

impl HttpFetcher {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            client: Client::new(),
        }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let target = self
            .origin
            .join(url)
            .map_err(|err| FetchError::network(url, err))?;
        tracing::debug!(%target, "fetching");

        let response = self
            .client
            .get(target)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(|err| FetchError::network(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response.text().map_err(|err| FetchError::network(url, err))
    }
}

/// Serves a site from a local directory.
///
/// `base` is the deployment base path the URLs were resolved with (`""` for a
/// root deployment); it is stripped before mapping onto `root`.
pub struct DirFetcher {
    root: PathBuf,
    base: String,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>, base: &str) -> Self {
        Self {
            root: root.into(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// The file a URL maps to, or `None` when it is outside the site.
    pub fn file_for(&self, url: &str) -> Option<PathBuf> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let decoded = percent_decode_str(path).decode_utf8().ok()?;
        let relative = decoded.strip_prefix(self.base.as_str())?;
        if !relative.starts_with('/') {
            return None;
        }
        let relative = Path::new(relative.trim_start_matches('/'));
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl Fetch for DirFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        if Url::parse(url).is_ok() {
            return Err(FetchError::network(url, "external URLs are not served from a local site"));
        }
        let file = self.file_for(url).ok_or_else(|| FetchError::not_found(url))?;
        tracing::debug!(file = %file.display(), "reading");
        fs::read_to_string(&file).map_err(|err| match err.kind() {
            ErrorKind::NotFound | ErrorKind::IsADirectory => FetchError::not_found(url),
            _ => FetchError::network(url, err),
        })
    }
}
