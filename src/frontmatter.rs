//! YAML front matter extraction.
//!
//! A post may open with a header block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: 2024 신입생 오리엔테이션
//! notice: 공지
//! date: 2024-02-20
//! fileAttachment:
//!   - data/files/orientation.pdf
//! ---
//! Body text...
//! ```
//!
//! Files without an opening fence, or with an opening fence that is never
//! closed, have no header: the whole text is the body. A block that is present
//! but is not valid YAML (or is not a mapping) is an error, so a typo in a
//! header never silently produces a record with missing fields.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const FENCE: &str = "---";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("invalid YAML in front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("front matter must be a mapping of keys to values")]
    NotAMapping,
}

/// Parsed header fields, keyed by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A scalar field as text. Numbers and booleans are stringified; null,
    /// sequences, and mappings read as absent.
    pub fn string(&self, key: &str) -> Option<String> {
        scalar_text(self.get(key)?)
    }

    /// A sequence field. Any other shape reads as absent.
    pub fn sequence(&self, key: &str) -> Option<&[Value]> {
        match self.get(key)? {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

/// Split `text` into its front matter and the remaining body.
pub fn parse(text: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some((header, body)) = split_header(text) else {
        return Ok((FrontMatter::default(), text));
    };

    let fields = match serde_yaml::from_str::<Value>(header)? {
        Value::Null => Mapping::new(),
        Value::Mapping(fields) => fields,
        _ => return Err(FrontMatterError::NotAMapping),
    };
    Ok((FrontMatter { fields }, body))
}

/// Locate the fenced header. Returns `(header, body)` slices of `text`.
fn split_header(text: &str) -> Option<(&str, &str)> {
    let (first, mut rest) = next_line(text)?;
    if !is_fence(first) {
        return None;
    }
    let header_start = text.len() - rest.len();

    loop {
        let line_start = text.len() - rest.len();
        let (line, after) = next_line(rest)?;
        if is_fence(line) {
            return Some((&text[header_start..line_start], after));
        }
        rest = after;
    }
}

/// Split off one line, without its terminator. `None` at end of input.
fn next_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    Some(match text.find('\n') {
        Some(i) => (text[..i].strip_suffix('\r').unwrap_or(&text[..i]), &text[i + 1..]),
        None => (text, ""),
    })
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
