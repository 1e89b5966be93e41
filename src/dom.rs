//! The page the board renders into.
//!
//! The board only needs a handful of things from its host page: named
//! container elements whose inner HTML it replaces and whose visibility it
//! toggles, and a viewport it can scroll back to the top. [`Document`] models
//! exactly that, so the same client logic runs in tests, in the CLI, and
//! behind any real page integration.

use std::collections::BTreeMap;

/// A container element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub html: String,
    pub visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            html: String::new(),
            visible: true,
        }
    }
}

impl Element {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_top: u32,
}

impl Viewport {
    pub fn scroll_to_top(&mut self) {
        self.scroll_top = 0;
    }
}

/// Elements addressed by id, plus the viewport.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    pub viewport: Viewport,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing empty, visible elements with the given ids.
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let mut document = Self::new();
        for id in ids {
            document.insert(id, Element::default());
        }
        document
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        self.elements.insert(id.to_string(), element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}
