use super::dom::Page;

pub const NAV_LINK_CLASS: &str = "nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Marks the navigation link whose `href` equals the current path.
///
/// Purely presentational; recomputed fresh on every page load, nothing is
/// persisted.
pub fn set_active_nav(page: &mut Page, current_path: &str) {
    for id in page.ids_with_class(NAV_LINK_CLASS) {
        let Some(link) = page.element_mut(&id) else {
            continue;
        };
        if link.attr("href") == Some(current_path) {
            link.add_class(ACTIVE_CLASS);
        } else {
            link.remove_class(ACTIVE_CLASS);
        }
    }
}
