//! Board ordering.
//!
//! One comparator orders posts everywhere: the index builder sorts with it
//! before writing, and the board client re-sorts with it after loading, so a
//! hand-edited index still renders in board order.
//!
//! 1. Pinned notices before everything else.
//! 2. Newer dates first. Dates are compared as calendar values; a date that
//!    does not start with a valid `YYYY-MM-DD` counts as the earliest date.
//! 3. Larger ids first. Numeric ids compare numerically, other ids compare as
//!    text (case-folded first, then exact). When only one of the two ids is
//!    numeric, the numeric one comes first.

use crate::date::leading_iso_date;
use crate::types::{PINNED_NOTICE, PostRecord};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Whether a `notice` value pins the post.
pub fn is_pinned(notice: &str) -> bool {
    notice.trim() == PINNED_NOTICE
}

/// Total order over records: `Less` means `a` is listed above `b`.
pub fn compare(a: &PostRecord, b: &PostRecord) -> Ordering {
    is_pinned(&b.notice)
        .cmp(&is_pinned(&a.notice))
        .then_with(|| date_key(&b.date).cmp(&date_key(&a.date)))
        .then_with(|| compare_ids_desc(&a.id, &b.id))
}

/// Sort records into board order.
pub fn sort(records: &mut [PostRecord]) {
    records.sort_by(compare);
}

fn date_key(date: &str) -> NaiveDate {
    leading_iso_date(date).unwrap_or(NaiveDate::MIN)
}

fn numeric_id(id: &str) -> Option<f64> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

// Numeric ids compare as numbers; anything else falls back to text collation.
fn compare_ids_desc(a: &str, b: &str) -> Ordering {
    match (numeric_id(a), numeric_id(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x).then_with(|| compare_text_desc(a, b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_text_desc(a, b),
    }
}

// Stands in for locale-aware collation (`localeCompare`): case-folded order
// first, exact code-point order as the tiebreak.
fn compare_text_desc(a: &str, b: &str) -> Ordering {
    b.to_lowercase()
        .cmp(&a.to_lowercase())
        .then_with(|| b.cmp(a))
}
