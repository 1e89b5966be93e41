//! # Noticeboard
//!
//! A bulletin board for static sites. Posts are plain files in a posts
//! directory; a build step turns them into a JSON index, and the board page
//! renders that index as a list with a detail view per post.
//!
//! # Architecture: Build Time and View Time
//!
//! ```text
//! build   data/posts/*  →  data/posts.json   (front matter → sorted records)
//! view    posts.json    →  list + detail     (fetch, order, render HTML)
//! ```
//!
//! The index is the only contract between the two halves. The builder always
//! writes the canonical shape; the viewer accepts hand-edited variations.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Splits a leading `---` YAML block from a post body |
//! | [`date`] | Normalizes loose date values to `YYYY-MM-DD` |
//! | [`types`] | `PostRecord` and `Attachment`, the index schema |
//! | [`order`] | Board order: pinned first, newest first, larger id first |
//! | [`index`] | Scans the posts directory and writes the index |
//! | [`paths`] | Base-path detection and URL building for subpath hosting |
//! | [`fetch`] | `Fetch` trait with HTTP and local-directory implementations |
//! | [`dom`] | The page containers the client renders into |
//! | [`markdown`] | Pluggable markdown rendering for post bodies |
//! | [`client`] | List and detail views driven by the index |
//! | [`config`] | `board.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## A Total Board Order
//!
//! Records are ordered by pin status, then date, then id. Ids that both look
//! numeric compare as numbers; otherwise numeric ids sort ahead of text ids
//! on a tie so the comparison stays transitive for any mix of ids.
//!
//! ## Trusted Bodies
//!
//! HTML bodies are inserted into the detail view as written. Post files are
//! authored by the site's maintainers, the same people who control the page
//! itself.
//!
//! ## Maud for HTML
//!
//! List rows, detail panels and error panels are built with
//! [Maud](https://maud.lambda.xyz/). Titles, authors and URLs from the index are
//! escaped on interpolation; only the post body is inserted raw.

pub mod client;
pub mod config;
pub mod date;
pub mod dom;
pub mod fetch;
pub mod frontmatter;
pub mod index;
pub mod logging;
pub mod markdown;
pub mod order;
pub mod output;
pub mod paths;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
