//! Sentiment percentage progress bars.

use crate::core::{capitalize, PercentageBreakdown, Sentiment};
use crate::view::{Element, Page};

pub const PROGRESS_MOUNT: &str = "progressBars";

/// Replaces the progress mount's entire contents with one labeled bar per
/// breakdown entry. Not incremental; silent no-op when the mount is absent.
///
/// Unknown sentiment labels render without a fill style class, which leaves
/// the bar unstyled rather than failing.
pub fn render_progress_bars(page: &mut Page, breakdown: &PercentageBreakdown) {
    let Some(mount) = page.element_mut(PROGRESS_MOUNT) else {
        return;
    };

    mount.children.clear();
    for (label, percentage) in breakdown.iter() {
        mount.children.push(progress_item(label, percentage));
    }
}

fn progress_item(label: &str, percentage: u8) -> Element {
    let caption = Element::new()
        .with_class("progress-label")
        .with_child(Element::new().with_text(capitalize(label)))
        .with_child(Element::new().with_text(format!("{percentage}%")));

    let mut fill = Element::new()
        .with_class("progress-fill")
        .with_style("width", format!("{percentage}%"))
        .with_child(
            Element::new()
                .with_class("progress-value")
                .with_text(format!("{percentage}%")),
        );
    if let Some(sentiment) = Sentiment::from_label(label) {
        fill.add_class(sentiment.style_class());
    }

    Element::new()
        .with_class("progress-item")
        .with_child(caption)
        .with_child(Element::new().with_class("progress-bar").with_child(fill))
}
