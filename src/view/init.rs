use tracing::debug;

use super::dom::Page;
use super::nav::set_active_nav;

pub const CARD_CLASS: &str = "card";
pub const FADE_IN_CLASS: &str = "fade-in";

/// Page-load initialization: active-nav marking plus staggered card fade-in.
///
/// Tooltip and upload wiring stay event-driven; the host forwards those DOM
/// events to `TooltipLayer` and `file_selected` as they happen.
pub fn init_page(page: &mut Page, current_path: &str) {
    set_active_nav(page, current_path);

    let card_ids = page.ids_with_class(CARD_CLASS);
    for (index, id) in card_ids.iter().enumerate() {
        if let Some(card) = page.element_mut(id) {
            card.set_style("animation-delay", format!("{:.1}s", index as f64 * 0.1));
            card.add_class(FADE_IN_CLASS);
        }
    }
    debug!(cards = card_ids.len(), current_path, "page initialized");
}
