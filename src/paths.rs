//! Deployment-relative URL resolution.
//!
//! A board page can be served from the root of a host (`https://example.org/`)
//! or from a project subpath (`https://user.github.io/repo/`). Every URL the
//! board fetches or links to is built from repo-relative paths, so the page
//! works unchanged in both deployments.
//!
//! URLs are percent-encoded with `encodeURI` rules: reserved URI characters
//! (`/`, `?`, `#`, `:` ...) are kept, spaces and non-ASCII text are encoded.

use crate::config::{BoardConfig, HostingConfig};
use crate::types::Attachment;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

/// Everything `encodeURI` escapes.
const URI: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode a URL string the way `encodeURI` does.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI).to_string()
}

/// Builds fetchable URLs under the deployment base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base: String,
    posts_dir: String,
    index_path: String,
}

impl PathResolver {
    /// Resolver for an explicit base, e.g. `"/repo"` or `""` for the root.
    pub fn with_base(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        let defaults = BoardConfig::default();
        Self {
            base,
            posts_dir: defaults.posts_dir,
            index_path: defaults.index_path,
        }
    }

    /// Resolver for a page served at `location`.
    pub fn from_location(location: &Url, hosting: &HostingConfig) -> Self {
        Self::with_base(&base_path(location, hosting))
    }

    /// Use the posts directory and index path from `config`.
    pub fn with_layout(mut self, config: &BoardConfig) -> Self {
        self.posts_dir = config.posts_dir.trim_matches('/').to_string();
        self.index_path = config.index_path.trim_start_matches('/').to_string();
        self
    }

    /// `""` for root deployments, `"/<segment>"` for subpath deployments.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a repo-relative path to the base and encode it.
    pub fn url_from_repo(&self, path: &str) -> String {
        let clean = path.trim_start_matches('/');
        encode_uri(&format!("{}/{}", self.base, clean))
    }

    pub fn index_url(&self) -> String {
        self.url_from_repo(&self.index_path)
    }

    /// Where an attachment link points. External `http(s)` URLs keep their
    /// target; everything else is repo-relative.
    pub fn attachment_href(&self, attachment: &Attachment) -> String {
        self.href(attachment.url())
    }

    pub fn href(&self, url: &str) -> String {
        if is_external(url) {
            encode_uri(url)
        } else {
            self.url_from_repo(url)
        }
    }

    /// Strip leading slashes and a redundant posts-directory prefix, so
    /// `post.md`, `data/posts/post.md`, and `/data/posts/post.md` all name
    /// the same file.
    pub fn normalize_contentfile<'a>(&self, raw: &'a str) -> &'a str {
        let trimmed = raw.trim_start_matches('/');
        match strip_prefix_ignore_case(trimmed, &self.posts_dir) {
            Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
            _ => trimmed,
        }
    }

    /// URL of a record's body, or `None` when the content file is empty.
    pub fn content_url(&self, contentfile: &str) -> Option<String> {
        let file = self.normalize_contentfile(contentfile);
        if file.is_empty() {
            return None;
        }
        Some(self.url_from_repo(&format!("{}/{}", self.posts_dir, file)))
    }
}

/// Compute the base path for a page location.
///
/// Subpath hosting applies only when the path has a directory segment. A
/// final segment with a `.` (`index.html`) is a file name, so `/index.html`
/// on a user site has no project prefix while `/repo` does.
pub fn base_path(location: &Url, hosting: &HostingConfig) -> String {
    let host = location.host_str().unwrap_or_default().to_ascii_lowercase();
    let subpath_host = hosting
        .subpath_suffixes
        .iter()
        .any(|suffix| host_matches(&host, &suffix.to_ascii_lowercase()));
    if !subpath_host {
        return String::new();
    }

    let path = location.path();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let ends_in_file = !path.ends_with('/')
        && segments.last().is_some_and(|last| last.contains('.'));
    let directory_segments = if ends_in_file {
        segments.len() - 1
    } else {
        segments.len()
    };
    match segments.first() {
        Some(first) if directory_segments > 0 => format!("/{first}"),
        _ => String::new(),
    }
}

fn host_matches(host: &str, suffix: &str) -> bool {
    host == suffix
        || host
            .strip_suffix(suffix)
            .is_some_and(|rest| rest.ends_with('.'))
}

fn is_external(url: &str) -> bool {
    strip_prefix_ignore_case(url, "http://").is_some()
        || strip_prefix_ignore_case(url, "https://").is_some()
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}
