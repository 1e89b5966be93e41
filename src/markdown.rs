//! Markdown bodies.
//!
//! The detail view hands `.md` bodies to a [`MarkdownRenderer`] chosen when
//! the client is built. [`CmarkRenderer`] converts them with pulldown-cmark;
//! [`PlainTextRenderer`] is the fallback that shows the source as escaped,
//! wrapped preformatted text.

use maud::html;
use pulldown_cmark::{Options, Parser, html as md_html};

/// Converts markdown text to an HTML fragment.
pub trait MarkdownRenderer {
    fn render(&self, markdown: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);

        let mut out = String::new();
        md_html::push_html(&mut out, Parser::new_ext(markdown, options));
        out
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl MarkdownRenderer for PlainTextRenderer {
    fn render(&self, markdown: &str) -> String {
        html! {
            pre style="white-space:pre-wrap" { (markdown) }
        }
        .into_string()
    }
}

/// The converter when markdown rendering is enabled, the plain-text fallback
/// otherwise.
pub fn default_renderer(markdown_enabled: bool) -> Box<dyn MarkdownRenderer> {
    if markdown_enabled {
        Box::new(CmarkRenderer)
    } else {
        Box::new(PlainTextRenderer)
    }
}
