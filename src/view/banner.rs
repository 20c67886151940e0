//! Transient status surfaces: the error banner and the loading indicator.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::dom::{Element, Page};

pub const ERROR_MOUNT: &str = "errorMsg";
pub const LOADING_MOUNT: &str = "loading";
pub const SHOW_CLASS: &str = "show";

const AUTO_HIDE_SECONDS: i64 = 5;
const WARNING_ICON_CLASSES: [&str; 2] = ["fas", "fa-exclamation-triangle"];

/// Controller for the auto-expiring error banner.
///
/// The hide deadline is re-armed on every `show_error`, so a later message
/// always gets its full display window (last-shown-wins); `hide_error` cancels
/// the pending deadline outright.
#[derive(Debug, Default)]
pub struct StatusBanner {
    hide_deadline: Option<DateTime<Utc>>,
}

impl StatusBanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_error(&mut self, page: &mut Page, message: &str, now: DateTime<Utc>) {
        let Some(banner) = page.element_mut(ERROR_MOUNT) else {
            return;
        };

        banner.children.clear();
        let mut icon = Element::new();
        for class in WARNING_ICON_CLASSES {
            icon.add_class(class);
        }
        banner.children.push(icon);
        banner.text = message.to_owned();
        banner.add_class(SHOW_CLASS);

        self.hide_deadline = Some(now + Duration::seconds(AUTO_HIDE_SECONDS));
        debug!(message, "show error banner");
    }

    pub fn hide_error(&mut self, page: &mut Page) {
        self.hide_deadline = None;
        if let Some(banner) = page.element_mut(ERROR_MOUNT) {
            banner.remove_class(SHOW_CLASS);
        }
    }

    /// Expires the auto-hide deadline. Call from the host's timer tick.
    pub fn tick(&mut self, page: &mut Page, now: DateTime<Utc>) {
        if self.hide_deadline.is_some_and(|deadline| now >= deadline) {
            self.hide_error(page);
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.hide_deadline.is_some()
    }
}

/// Shows the loading indicator. Nested shows collapse to one visible state.
pub fn show_loading(page: &mut Page) {
    if let Some(indicator) = page.element_mut(LOADING_MOUNT) {
        indicator.add_class(SHOW_CLASS);
    }
}

pub fn hide_loading(page: &mut Page) {
    if let Some(indicator) = page.element_mut(LOADING_MOUNT) {
        indicator.remove_class(SHOW_CLASS);
    }
}
