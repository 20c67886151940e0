use indexmap::indexmap;
use sentiviz::chart::{ChartManager, ChartSlot, NullBackend};
use sentiviz::core::{ConfidenceSeries, DistributionData, FrequencyData, Sentiment};
use sentiviz::view::{Element, Page};

fn dashboard_page() -> Page {
    let mut page = Page::new();
    page.insert("sentimentChart", Element::new());
    page.insert("wordChart", Element::new());
    page.insert("confidenceChart", Element::new());
    page
}

fn sample_distribution() -> DistributionData {
    DistributionData::new(
        indexmap! {
            "positif".to_owned() => 10u64,
            "negatif".to_owned() => 6u64,
            "netral".to_owned() => 4u64,
        },
        vec![
            Sentiment::Positive.color(),
            Sentiment::Negative.color(),
            Sentiment::Neutral.color(),
        ],
    )
    .expect("valid distribution")
}

fn sample_frequency() -> FrequencyData {
    FrequencyData::new(
        vec!["bagus".to_owned(), "cepat".to_owned()],
        vec![7, 3],
        vec![Sentiment::Positive.color(), Sentiment::Neutral.color()],
    )
    .expect("valid frequency")
}

fn sample_confidence() -> ConfidenceSeries {
    ConfidenceSeries::from_values("Tingkat Kepercayaan", vec![80.0, 92.5, 88.0])
        .expect("valid series")
}

#[test]
fn rendering_same_slot_twice_keeps_one_live_handle() {
    let page = dashboard_page();
    let mut manager = ChartManager::new(NullBackend::new());

    manager
        .render_distribution(&page, &sample_distribution())
        .expect("first render");
    manager
        .render_distribution(&page, &sample_distribution())
        .expect("second render");

    let backend = manager.backend();
    assert_eq!(backend.created, 2);
    assert_eq!(backend.destroyed, 1);
    assert_eq!(backend.live_count(), 1);
    assert!(manager.slot_is_live(ChartSlot::Distribution));
}

#[test]
fn each_slot_targets_its_fixed_mount() {
    let page = dashboard_page();
    let mut manager = ChartManager::new(NullBackend::new());

    manager
        .render_frequency(&page, &sample_frequency())
        .expect("render");
    assert_eq!(manager.backend().last_mount.as_deref(), Some("wordChart"));

    manager
        .render_confidence(&page, &sample_confidence())
        .expect("render");
    assert_eq!(
        manager.backend().last_mount.as_deref(),
        Some("confidenceChart")
    );
}

#[test]
fn missing_mount_is_a_silent_noop() {
    let page = Page::new();
    let mut manager = ChartManager::new(NullBackend::new());

    manager
        .render_distribution(&page, &sample_distribution())
        .expect("render on empty page");

    assert_eq!(manager.backend().created, 0);
    assert!(!manager.slot_is_live(ChartSlot::Distribution));
}

#[test]
fn partial_layout_renders_only_mounted_slots() {
    let mut page = Page::new();
    page.insert("wordChart", Element::new());

    assert_eq!(ChartManager::<NullBackend>::mounted_slots(&page), [ChartSlot::Frequency]);

    let mut manager = ChartManager::new(NullBackend::new());
    manager
        .render_distribution(&page, &sample_distribution())
        .expect("render");
    manager
        .render_frequency(&page, &sample_frequency())
        .expect("render");

    assert_eq!(manager.backend().created, 1);
    assert_eq!(manager.live_slot_count(), 1);
}

#[test]
fn teardown_destroys_all_slots_and_is_idempotent() {
    let page = dashboard_page();
    let mut manager = ChartManager::new(NullBackend::new());

    manager
        .render_distribution(&page, &sample_distribution())
        .expect("render");
    manager
        .render_frequency(&page, &sample_frequency())
        .expect("render");
    manager
        .render_confidence(&page, &sample_confidence())
        .expect("render");
    assert_eq!(manager.live_slot_count(), 3);

    manager.teardown();
    assert_eq!(manager.live_slot_count(), 0);
    assert_eq!(manager.backend().destroyed, 3);
    assert_eq!(manager.backend().live_count(), 0);

    manager.teardown();
    assert_eq!(manager.backend().destroyed, 3);

    // The manager is reusable from the clean state.
    manager
        .render_distribution(&page, &sample_distribution())
        .expect("render after teardown");
    assert_eq!(manager.live_slot_count(), 1);
}
