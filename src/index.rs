//! Board index building.
//!
//! Scans the posts directory, turns every post file into a [`PostRecord`],
//! sorts the records into board order, and writes them as the JSON index the
//! board page loads.
//!
//! ## Record fields
//!
//! | Field            | Source                                         | Default            |
//! |------------------|------------------------------------------------|--------------------|
//! | `id`             | file name stem                                 |                    |
//! | `title`          | front matter `title`                           | `""`               |
//! | `author`         | front matter `author`                          | `""`               |
//! | `notice`         | front matter `notice`, trimmed                 | `일반`             |
//! | `date`           | front matter `date`, normalized                | file mtime date    |
//! | `contentfile`    | file name                                      |                    |
//! | `fileAttachment` | front matter `fileAttachment`/`file_attachment`| `[]`               |
//!
//! ## Output
//!
//! The index is a pretty-printed JSON array with a trailing newline. It is
//! written to a temporary file next to the target and renamed over it, so a
//! reader never sees a half-written index.

use crate::config::{BoardConfig, FrontMatterPolicy};
use crate::date;
use crate::frontmatter::{self, FrontMatter, FrontMatterError};
use crate::order;
use crate::types::{Attachment, NORMAL_NOTICE, PostRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const ATTACHMENT_KEYS: &[&str] = &["fileAttachment", "file_attachment"];

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Posts directory not found: {0}")]
    MissingPostsDir(PathBuf),
    #[error("Reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Front matter in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
}

/// A post left out of the index under [`FrontMatterPolicy::Skip`].
#[derive(Debug)]
pub struct SkippedPost {
    pub path: PathBuf,
    pub reason: String,
}

/// Records found by a scan, in board order.
#[derive(Debug, Default)]
pub struct Scan {
    pub records: Vec<PostRecord>,
    pub skipped: Vec<SkippedPost>,
    /// Ids carried by more than one record. Lookups resolve to the first.
    pub duplicate_ids: Vec<String>,
}

/// Result of a full build.
#[derive(Debug)]
pub struct BuildReport {
    pub scan: Scan,
    /// Path the index was written to.
    pub output: PathBuf,
}

impl BuildReport {
    pub fn post_count(&self) -> usize {
        self.scan.records.len()
    }
}

/// Scan the posts directory under `root` and write the index.
pub fn build(root: &Path, config: &BoardConfig) -> Result<BuildReport, IndexError> {
    let scan = scan(root, config)?;
    let output = root.join(&config.index_path);
    write_index(&output, &scan.records)?;
    tracing::info!(
        path = %output.display(),
        posts = scan.records.len(),
        "wrote board index"
    );
    Ok(BuildReport { scan, output })
}

/// Build records for every post file without writing anything.
pub fn scan(root: &Path, config: &BoardConfig) -> Result<Scan, IndexError> {
    let posts_dir = root.join(&config.posts_dir);
    let mut scan = Scan::default();

    for path in post_files(&posts_dir, config)? {
        let text = fs::read_to_string(&path).map_err(|source| IndexError::Read {
            path: path.clone(),
            source,
        })?;
        let modified = fs::metadata(&path)?.modified()?;
        let fallback_date = date::format_system_time(modified);

        match record_from_source(&path, &text, &fallback_date) {
            Ok(record) => {
                tracing::debug!(id = %record.id, date = %record.date, "indexed post");
                scan.records.push(record);
            }
            Err(source) => match config.on_invalid_front_matter {
                FrontMatterPolicy::Abort => {
                    return Err(IndexError::FrontMatter { path, source });
                }
                FrontMatterPolicy::Skip => {
                    tracing::warn!(path = %path.display(), error = %source, "skipping post");
                    scan.skipped.push(SkippedPost {
                        path,
                        reason: source.to_string(),
                    });
                }
            },
        }
    }

    scan.duplicate_ids = duplicate_ids(&scan.records);
    for id in &scan.duplicate_ids {
        tracing::warn!(%id, "duplicate post id; the board will only link the first");
    }

    order::sort(&mut scan.records);
    Ok(scan)
}

/// Post files directly inside `posts_dir`, in file-name order.
pub fn post_files(posts_dir: &Path, config: &BoardConfig) -> Result<Vec<PathBuf>, IndexError> {
    if !posts_dir.is_dir() {
        return Err(IndexError::MissingPostsDir(posts_dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(posts_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && config.is_post_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Build one record from a post file's path and contents.
///
/// `fallback_date` is used when the header has no usable `date`.
pub fn record_from_source(
    path: &Path,
    text: &str,
    fallback_date: &str,
) -> Result<PostRecord, FrontMatterError> {
    let (front, _body) = frontmatter::parse(text)?;

    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let contentfile = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let date_value = front.get("date").and_then(date::date_from_value);
    let date = date::normalize_date(date_value.as_ref(), fallback_date);

    Ok(PostRecord {
        notice: front
            .string("notice")
            .map(|n| n.trim().to_string())
            .unwrap_or_else(|| NORMAL_NOTICE.to_string()),
        title: front.string("title").unwrap_or_default(),
        author: front.string("author").unwrap_or_default(),
        date,
        attachments: attachments(&front, &id),
        id,
        contentfile,
    })
}

fn attachments(front: &FrontMatter, id: &str) -> Vec<Attachment> {
    let Some(items) = ATTACHMENT_KEYS.iter().find_map(|key| front.sequence(key)) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match serde_yaml::from_value::<Attachment>(item.clone()) {
            Ok(attachment) => Some(attachment),
            Err(_) => {
                tracing::warn!(%id, ?item, "ignoring attachment that is not a path or {{name, url}}");
                None
            }
        })
        .collect()
}

fn duplicate_ids(records: &[PostRecord]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.id.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Serialize records as the index file contents.
pub fn render_index(records: &[PostRecord]) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');
    Ok(json)
}

/// Replace the index at `path` with `records`.
pub fn write_index(path: &Path, records: &[PostRecord]) -> Result<(), IndexError> {
    let json = render_index(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "index.json".to_string());
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
