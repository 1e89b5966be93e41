//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every post is shown by its board position and title, with the file it came
//! from as an indented `Source:` line. The listing reads as the board itself
//! while still pointing back at the files that produced it.
//!
//! # Output Format
//!
//! ## Build / Check
//!
//! ```text
//! Posts
//! 001 [공지] 개학 안내 (2024-03-02)
//!     Source: data/posts/opening.md
//!     Attachments: 학사일정.pdf
//! 002 (draft) (2024-01-01)
//!     Source: data/posts/draft.html
//!
//! Skipped
//!     data/posts/broken.md: invalid front matter
//!
//! Duplicate ids
//!     notes
//!
//! Wrote data/posts.json (2 posts)
//! ```
//!
//! ## List
//!
//! ```text
//! 001 [공지] 개학 안내 (2024-03-02)
//!     Author: 교무실
//! 002 ...
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::index::{BuildReport, Scan};
use crate::types::{PINNED_NOTICE, PostRecord};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line for a post: position, pin marker, title, date.
///
/// ```text
/// 001 [공지] Opening (2024-03-02)
/// 002 (draft) (2024-01-01)      // untitled: the id IS the identity
/// ```
fn post_line(index: usize, record: &PostRecord) -> String {
    let marker = if record.is_pinned() {
        format!("[{}] ", PINNED_NOTICE)
    } else {
        String::new()
    };
    let title = if record.title.is_empty() {
        format!("({})", record.id)
    } else {
        record.title.clone()
    };
    format!("{} {}{} ({})", format_index(index), marker, title, record.date)
}

fn attachment_labels(record: &PostRecord) -> Vec<String> {
    record
        .attachments
        .iter()
        .filter_map(|a| a.link().map(|link| link.label))
        .collect()
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn scan_lines(scan: &Scan, posts_dir: &str) -> Vec<String> {
    let mut lines = vec!["Posts".to_string()];
    if scan.records.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, record) in scan.records.iter().enumerate() {
        lines.push(post_line(i + 1, record));
        lines.push(format!(
            "    Source: {}/{}",
            posts_dir.trim_end_matches('/'),
            record.contentfile
        ));
        let labels = attachment_labels(record);
        if !labels.is_empty() {
            lines.push(format!("    Attachments: {}", labels.join(", ")));
        }
    }

    if !scan.skipped.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for skipped in &scan.skipped {
            lines.push(format!("    {}: {}", skipped.path.display(), skipped.reason));
        }
    }

    if !scan.duplicate_ids.is_empty() {
        lines.push(String::new());
        lines.push("Duplicate ids".to_string());
        for id in &scan.duplicate_ids {
            lines.push(format!("    {}", id));
        }
    }
    lines
}

fn post_noun(n: usize) -> &'static str {
    if n == 1 { "post" } else { "posts" }
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of writing the index.
pub fn format_build_output(report: &BuildReport, root: &Path, posts_dir: &str) -> Vec<String> {
    let mut lines = scan_lines(&report.scan, posts_dir);
    lines.push(String::new());
    let count = report.post_count();
    lines.push(format!(
        "Wrote {} ({} {})",
        display_path(&report.output, root),
        count,
        post_noun(count)
    ));
    lines
}

pub fn print_build_output(report: &BuildReport, root: &Path, posts_dir: &str) {
    for line in format_build_output(report, root, posts_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format a dry-run scan: what the index would contain.
pub fn format_check_output(scan: &Scan, posts_dir: &str) -> Vec<String> {
    let mut lines = scan_lines(scan, posts_dir);
    lines.push(String::new());
    let count = scan.records.len();
    let mut summary = format!("{} {} ok", count, post_noun(count));
    if !scan.skipped.is_empty() {
        summary.push_str(&format!(", {} skipped", scan.skipped.len()));
    }
    lines.push(summary);
    lines
}

pub fn print_check_output(scan: &Scan, posts_dir: &str) {
    for line in format_check_output(scan, posts_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// List / Show
// ============================================================================

/// Format a loaded board in display order.
pub fn format_board_listing(records: &[&PostRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["(no posts)".to_string()];
    }
    let mut lines = Vec::new();
    for (i, record) in records.iter().enumerate() {
        lines.push(post_line(i + 1, record));
        lines.push(format!("    Id: {}", record.id));
        if !record.author.is_empty() {
            lines.push(format!("    Author: {}", record.author));
        }
    }
    lines
}

pub fn print_board_listing(records: &[&PostRecord]) {
    for line in format_board_listing(records) {
        println!("{}", line);
    }
}

/// Format a post's detail view: summary lines, then the rendered HTML.
pub fn format_detail_output(record: &PostRecord, html: &str) -> Vec<String> {
    let mut lines = vec![post_line(1, record).split_off(4)];
    if !record.author.is_empty() {
        lines.push(format!("    Author: {}", record.author));
    }
    if !record.contentfile.is_empty() {
        lines.push(format!("    Source: {}", record.contentfile));
    }
    lines.push(String::new());
    lines.push(html.to_string());
    lines
}

pub fn print_detail_output(record: &PostRecord, html: &str) {
    for line in format_detail_output(record, html) {
        println!("{}", line);
    }
}
