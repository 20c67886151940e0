//! Hover tooltips for elements carrying a `data-tooltip` attribute.
//!
//! Each source element owns at most one floating label at a time. Enter and
//! leave are an explicit attach/detach pair: enter replaces any label already
//! attached to the same source, leave always detaches, so rapid hover toggling
//! cannot orphan overlay nodes.

use super::dom::{Element, Page, Rect};
use crate::core::Rgba;

pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const TOOLTIP_CLASS: &str = "custom-tooltip";

/// Overlay attribute linking a floating label back to its source element.
const SOURCE_ATTR: &str = "data-tooltip-for";

const GAP_PX: f64 = 10.0;
const LABEL_HEIGHT_PX: f64 = 28.0;
const MAX_WIDTH_PX: f64 = 200.0;

#[derive(Debug, Default)]
pub struct TooltipLayer {
    open: Vec<String>,
}

impl TooltipLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a floating label above the hovered element.
    ///
    /// No-op when the element is missing or carries no tooltip attribute.
    pub fn pointer_enter(&mut self, page: &mut Page, id: &str) {
        let Some(source) = page.element(id) else {
            return;
        };
        let Some(text) = source.attr(TOOLTIP_ATTR) else {
            return;
        };
        let text = text.to_owned();
        let rect = source.rect;

        self.detach(page, id);

        let label = Element::new()
            .with_class(TOOLTIP_CLASS)
            .with_attr(SOURCE_ATTR, id)
            .with_text(text)
            .with_style("background", Rgba::rgba(0, 0, 0, 0.8).css())
            .with_style("color", "white")
            .with_style("padding", "8px 12px")
            .with_style("border-radius", "4px")
            .with_style("font-size", "12px")
            .with_style("z-index", "10000")
            .with_style("max-width", "200px")
            .with_rect(Rect::new(
                rect.x,
                rect.y - LABEL_HEIGHT_PX - GAP_PX,
                MAX_WIDTH_PX.min(rect.width.max(1.0)),
                LABEL_HEIGHT_PX,
            ));
        page.push_overlay(label);
        self.open.push(id.to_owned());
    }

    /// Detaches the label attached to `id`, if any.
    pub fn pointer_leave(&mut self, page: &mut Page, id: &str) {
        self.detach(page, id);
    }

    fn detach(&mut self, page: &mut Page, id: &str) {
        page.retain_overlays(|overlay| overlay.attr(SOURCE_ATTR) != Some(id));
        self.open.retain(|open_id| open_id != id);
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open_id| open_id == id)
    }
}
