//! Retained view model synced to a real DOM (or any widget tree) by the host.
//!
//! Lookup by id returns `Option` on purpose: pages are allowed to mount only a
//! subset of the known views, and every helper in this crate treats a missing
//! element as a silent no-op.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Element geometry in page coordinates, supplied by the host layout engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: IndexMap<String, String>,
    pub styles: IndexMap<String, String>,
    pub text: String,
    pub disabled: bool,
    pub rect: Rect,
    pub children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(name, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|existing| existing != class);
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }
}

/// One page's worth of identifiable elements plus a floating overlay layer.
///
/// Top-level elements are registered by id in insertion order; overlays hold
/// transient nodes (hover tooltips) that never participate in id lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    elements: IndexMap<String, Element>,
    overlays: Vec<Element>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` under `id`, overwriting the element's own id field.
    pub fn insert(&mut self, id: impl Into<String>, mut element: Element) {
        let id = id.into();
        element.id = Some(id.clone());
        self.elements.insert(id, element);
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    #[must_use]
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Ids of top-level elements carrying `class`, in insertion order.
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, element)| element.has_class(class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Ids of top-level elements carrying attribute `name`, in insertion order.
    #[must_use]
    pub fn ids_with_attr(&self, name: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, element)| element.attrs.contains_key(name))
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn push_overlay(&mut self, overlay: Element) {
        self.overlays.push(overlay);
    }

    #[must_use]
    pub fn overlays(&self) -> &[Element] {
        &self.overlays
    }

    pub fn retain_overlays(&mut self, keep: impl FnMut(&Element) -> bool) {
        self.overlays.retain(keep);
    }
}
