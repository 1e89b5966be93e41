//! Shared test utilities for the noticeboard test suite.
//!
//! Provides record builders, a site fixture writer, an in-memory fetcher and
//! small extractors over rendered board HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = setup_site(&[PostFixture::new("1.md", "---\ndate: 2024-01-01\n---\n")]);
//! let scan = scan(site.path(), &BoardConfig::default()).unwrap();
//! assert_eq!(ids(&scan.records), ["1"]);
//!
//! let fetcher = StaticFetcher::default().with("/data/posts.json", "[]");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

use crate::client::REQUIRED_ELEMENTS;
use crate::dom::Document;
use crate::fetch::{Fetch, FetchError};
use crate::types::{NORMAL_NOTICE, PINNED_NOTICE, PostRecord};

// =========================================================================
// Records
// =========================================================================

/// A normal post with `id` and `date`; other fields are empty.
pub fn record(id: &str, date: &str) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        notice: NORMAL_NOTICE.to_string(),
        title: format!("Post {id}"),
        author: String::new(),
        date: date.to_string(),
        contentfile: String::new(),
        attachments: Vec::new(),
    }
}

/// A pinned post with `id` and `date`.
pub fn pinned(id: &str, date: &str) -> PostRecord {
    PostRecord {
        notice: PINNED_NOTICE.to_string(),
        ..record(id, date)
    }
}

/// Ids in slice order.
pub fn ids(records: &[PostRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// =========================================================================
// Site fixtures
// =========================================================================

/// One file to place in the posts directory.
pub struct PostFixture {
    pub file: &'static str,
    pub contents: &'static str,
}

impl PostFixture {
    pub fn new(file: &'static str, contents: &'static str) -> Self {
        Self { file, contents }
    }
}

/// Write `posts` into `data/posts/` of a fresh temp site.
pub fn setup_site(posts: &[PostFixture]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("data/posts");
    fs::create_dir_all(&dir).unwrap();
    for post in posts {
        fs::write(dir.join(post.file), post.contents).unwrap();
    }
    tmp
}

// =========================================================================
// Client
// =========================================================================

/// A page with every board container.
pub fn board_document() -> Document {
    Document::with_elements(REQUIRED_ELEMENTS)
}

/// Serves fixed responses by URL and records every request. Unknown URLs
/// answer 404.
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<String, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl StaticFetcher {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn failing(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetch for StaticFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses.get(url).cloned().unwrap_or_else(|| {
            Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
        })
    }
}

/// `data-id` values of the board links, in document order.
pub fn row_ids(html: &str) -> Vec<String> {
    html.split("data-id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
