use tracing::trace;

use super::banner::StatusBanner;
use super::dom::{Element, Page};
use crate::util::FileMeta;

pub const FILE_NAME_MOUNT: &str = "fileName";
pub const ANALYZE_BTN_MOUNT: &str = "analyzeBtn";

const CHECK_ICON_CLASSES: [&str; 2] = ["fas", "fa-check-circle"];
const CHECK_ICON_COLOR: &str = "#48bb78";

/// Reflects a chosen upload in the page: shows `name (N.NN KB)` next to a
/// check icon, enables the analyze control, and clears any visible error.
pub fn file_selected(page: &mut Page, banner: &mut StatusBanner, file: &FileMeta) {
    if let Some(label) = page.element_mut(FILE_NAME_MOUNT) {
        label.children.clear();
        let mut icon = Element::new().with_style("color", CHECK_ICON_COLOR);
        for class in CHECK_ICON_CLASSES {
            icon.add_class(class);
        }
        label.children.push(icon);

        let kib = file.size_bytes as f64 / 1024.0;
        label.text = format!("{} ({kib:.2} KB)", file.name);
    }

    if let Some(button) = page.element_mut(ANALYZE_BTN_MOUNT) {
        button.disabled = false;
    }

    banner.hide_error(page);
    trace!(name = %file.name, bytes = file.size_bytes, "file selected");
}
