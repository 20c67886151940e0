use sentiviz::chart::{render_progress_bars, PROGRESS_MOUNT};
use sentiviz::core::PercentageBreakdown;
use sentiviz::view::{Element, Page};

fn page_with_mount() -> Page {
    let mut page = Page::new();
    page.insert(PROGRESS_MOUNT, Element::new());
    page
}

#[test]
fn renders_one_item_per_entry_with_sentiment_classes() {
    let mut page = page_with_mount();
    let breakdown = PercentageBreakdown::new()
        .with("positif", 60)
        .with("negatif", 25)
        .with("netral", 15);

    render_progress_bars(&mut page, &breakdown);

    let mount = page.element(PROGRESS_MOUNT).expect("mount");
    assert_eq!(mount.children.len(), 3);

    let item = &mount.children[0];
    assert!(item.has_class("progress-item"));

    let caption = &item.children[0];
    assert!(caption.has_class("progress-label"));
    assert_eq!(caption.children[0].text, "Positif");
    assert_eq!(caption.children[1].text, "60%");

    let fill = &item.children[1].children[0];
    assert!(fill.has_class("progress-fill"));
    assert!(fill.has_class("positive"));
    assert_eq!(fill.style("width"), Some("60%"));
    assert_eq!(fill.children[0].text, "60%");

    let negative_fill = &mount.children[1].children[1].children[0];
    assert!(negative_fill.has_class("negative"));
    let neutral_fill = &mount.children[2].children[1].children[0];
    assert!(neutral_fill.has_class("neutral"));
}

#[test]
fn unknown_labels_render_without_a_style_class() {
    let mut page = page_with_mount();
    let breakdown = PercentageBreakdown::new().with("senang", 40);

    render_progress_bars(&mut page, &breakdown);

    let fill = &page.element(PROGRESS_MOUNT).expect("mount").children[0].children[1].children[0];
    assert_eq!(fill.classes, ["progress-fill"]);
    assert_eq!(fill.style("width"), Some("40%"));
}

#[test]
fn rerender_fully_replaces_previous_bars() {
    let mut page = page_with_mount();
    render_progress_bars(
        &mut page,
        &PercentageBreakdown::new()
            .with("positif", 50)
            .with("negatif", 50),
    );
    render_progress_bars(&mut page, &PercentageBreakdown::new().with("netral", 100));

    let mount = page.element(PROGRESS_MOUNT).expect("mount");
    assert_eq!(mount.children.len(), 1);
    assert_eq!(mount.children[0].children[0].children[0].text, "Netral");
}

#[test]
fn missing_mount_is_a_silent_noop() {
    let mut page = Page::new();
    render_progress_bars(&mut page, &PercentageBreakdown::new().with("positif", 10));
    assert!(page.element(PROGRESS_MOUNT).is_none());
}
