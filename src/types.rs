//! Shared types written by the index builder and read by the board client.
//!
//! The index file is a JSON array of [`PostRecord`]s. The builder always
//! writes the canonical shape; the reader is lenient because indexes are
//! sometimes edited by hand (numbers where text is expected, the older
//! `file_attachment` key, attachment entries that are neither strings nor
//! `{name, url}` objects).

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

/// The `notice` value that pins a post to the top of the board.
pub const PINNED_NOTICE: &str = "공지";

/// The `notice` value written when a post declares none.
pub const NORMAL_NOTICE: &str = "일반";

/// One post in the board index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexEntry")]
pub struct PostRecord {
    /// Source filename stem, e.g. `2024-open-day` for `2024-open-day.md`.
    pub id: String,
    pub notice: String,
    pub title: String,
    pub author: String,
    /// Always `YYYY-MM-DD` in indexes produced by the builder.
    pub date: String,
    /// File name of the body, relative to the posts directory.
    pub contentfile: String,
    #[serde(rename = "fileAttachment")]
    pub attachments: Vec<Attachment>,
}

/// An index entry as found on disk. Scalar fields of any JSON type read as
/// text; `fileAttachment` shadows the older `file_attachment` key.
#[derive(Deserialize)]
struct IndexEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    notice: String,
    #[serde(default, deserialize_with = "lenient_string")]
    title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    author: String,
    #[serde(default, deserialize_with = "lenient_string")]
    date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    contentfile: String,
    #[serde(rename = "fileAttachment", default, deserialize_with = "lenient_attachments")]
    attachments: Option<Vec<Attachment>>,
    #[serde(rename = "file_attachment", default, deserialize_with = "lenient_attachments")]
    legacy_attachments: Option<Vec<Attachment>>,
}

impl From<IndexEntry> for PostRecord {
    fn from(entry: IndexEntry) -> Self {
        Self {
            id: entry.id,
            notice: entry.notice,
            title: entry.title,
            author: entry.author,
            date: entry.date,
            contentfile: entry.contentfile,
            attachments: entry
                .attachments
                .or(entry.legacy_attachments)
                .unwrap_or_default(),
        }
    }
}

impl PostRecord {
    /// Whether this record is pinned above normal posts.
    pub fn is_pinned(&self) -> bool {
        crate::order::is_pinned(&self.notice)
    }
}

/// An attachment reference: either a bare path/URL or a labelled URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attachment {
    /// `"data/files/a.pdf"` or `"https://example.org/a.pdf"`.
    Path(String),
    /// `{ "name": "Syllabus", "url": "data/files/syllabus.pdf" }`.
    Named {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        url: String,
    },
}

/// A normalized attachment: where it points and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentLink<'a> {
    pub url: &'a str,
    pub label: String,
}

impl Attachment {
    pub fn url(&self) -> &str {
        match self {
            Attachment::Path(url) => url,
            Attachment::Named { url, .. } => url,
        }
    }

    /// Normalize either shape into a link. Returns `None` for an empty URL.
    ///
    /// The label is the explicit name when present and non-empty, otherwise
    /// the last path segment of the URL.
    pub fn link(&self) -> Option<AttachmentLink<'_>> {
        let url = self.url();
        if url.is_empty() {
            return None;
        }
        let label = match self {
            Attachment::Named {
                name: Some(name), ..
            } if !name.is_empty() => name.clone(),
            _ => basename(url).to_string(),
        };
        Some(AttachmentLink { url, label })
    }
}

/// Last `/`-separated segment, or the whole string when that segment is empty.
pub fn basename(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Unsigned(u64),
        Float(f64),
        Bool(bool),
        Other(IgnoredAny),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Other(_) => String::new(),
    })
}

fn lenient_attachments<'de, D>(deserializer: D) -> Result<Option<Vec<Attachment>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Valid(Attachment),
        Invalid(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        List(Vec<Entry>),
        Other(IgnoredAny),
    }

    Ok(Some(match Field::deserialize(deserializer)? {
        Field::List(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Valid(attachment) => Some(attachment),
                Entry::Invalid(_) => None,
            })
            .collect(),
        Field::Other(_) => Vec::new(),
    }))
}
