use chrono::{TimeZone, Utc};
use sentiviz::util::FileMeta;
use sentiviz::view::{
    file_selected, init_page, set_active_nav, Element, Page, StatusBanner, ACTIVE_CLASS,
    ANALYZE_BTN_MOUNT, CARD_CLASS, ERROR_MOUNT, FADE_IN_CLASS, FILE_NAME_MOUNT, NAV_LINK_CLASS,
    SHOW_CLASS,
};

#[test]
fn file_selection_updates_label_enables_button_and_clears_error() {
    let mut page = Page::new();
    page.insert(FILE_NAME_MOUNT, Element::new());
    page.insert(ANALYZE_BTN_MOUNT, Element::new().disabled());
    page.insert(ERROR_MOUNT, Element::new());

    let mut banner = StatusBanner::new();
    let now = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
    banner.show_error(&mut page, "galat lama", now);

    file_selected(&mut page, &mut banner, &FileMeta::new("data.csv", 5120));

    let label = page.element(FILE_NAME_MOUNT).expect("label");
    assert_eq!(label.text, "data.csv (5.00 KB)");
    assert!(label.children[0].has_class("fa-check-circle"));

    assert!(!page.element(ANALYZE_BTN_MOUNT).expect("button").disabled);
    assert!(!page.element(ERROR_MOUNT).expect("banner").has_class(SHOW_CLASS));
    assert!(!banner.is_armed());
}

#[test]
fn fractional_kilobytes_keep_two_decimals() {
    let mut page = Page::new();
    page.insert(FILE_NAME_MOUNT, Element::new());
    let mut banner = StatusBanner::new();

    file_selected(&mut page, &mut banner, &FileMeta::new("ulasan.csv", 1234));
    assert_eq!(
        page.element(FILE_NAME_MOUNT).expect("label").text,
        "ulasan.csv (1.21 KB)"
    );
}

#[test]
fn active_nav_follows_the_current_path() {
    let mut page = Page::new();
    page.insert(
        "navHome",
        Element::new().with_class(NAV_LINK_CLASS).with_attr("href", "/"),
    );
    page.insert(
        "navHistory",
        Element::new()
            .with_class(NAV_LINK_CLASS)
            .with_attr("href", "/history"),
    );

    set_active_nav(&mut page, "/history");
    assert!(!page.element("navHome").expect("home").has_class(ACTIVE_CLASS));
    assert!(page.element("navHistory").expect("history").has_class(ACTIVE_CLASS));

    // Recomputed fresh: moving back flips the highlight.
    set_active_nav(&mut page, "/");
    assert!(page.element("navHome").expect("home").has_class(ACTIVE_CLASS));
    assert!(!page.element("navHistory").expect("history").has_class(ACTIVE_CLASS));
}

#[test]
fn init_page_staggers_card_fade_in() {
    let mut page = Page::new();
    page.insert("cardA", Element::new().with_class(CARD_CLASS));
    page.insert("cardB", Element::new().with_class(CARD_CLASS));
    page.insert("cardC", Element::new().with_class(CARD_CLASS));

    init_page(&mut page, "/");

    for (id, delay) in [("cardA", "0.0s"), ("cardB", "0.1s"), ("cardC", "0.2s")] {
        let card = page.element(id).expect("card");
        assert!(card.has_class(FADE_IN_CLASS));
        assert_eq!(card.style("animation-delay"), Some(delay));
    }
}
