mod banner;
mod dom;
mod init;
mod nav;
mod tooltip;
mod upload;

pub use banner::{
    hide_loading, show_loading, StatusBanner, ERROR_MOUNT, LOADING_MOUNT, SHOW_CLASS,
};
pub use dom::{Element, Page, Rect};
pub use init::{init_page, CARD_CLASS, FADE_IN_CLASS};
pub use nav::{set_active_nav, ACTIVE_CLASS, NAV_LINK_CLASS};
pub use tooltip::{TooltipLayer, TOOLTIP_ATTR, TOOLTIP_CLASS};
pub use upload::{file_selected, ANALYZE_BTN_MOUNT, FILE_NAME_MOUNT};
