use serde::{Deserialize, Serialize};
use sentiviz::util::{load_json, save_json, MemoryStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AnalysisSummary {
    total_reviews: u32,
    dominant: String,
    percentages: Vec<u8>,
}

fn sample_summary() -> AnalysisSummary {
    AnalysisSummary {
        total_reviews: 120,
        dominant: "positif".to_owned(),
        percentages: vec![60, 25, 15],
    }
}

#[test]
fn round_trip_yields_deep_equal_value() {
    let mut store = MemoryStore::new();
    assert!(save_json(&mut store, "lastAnalysis", &sample_summary()));

    let loaded: Option<AnalysisSummary> = load_json(&store, "lastAnalysis");
    assert_eq!(loaded, Some(sample_summary()));
}

#[test]
fn missing_key_yields_none() {
    let store = MemoryStore::new();
    let loaded: Option<AnalysisSummary> = load_json(&store, "neverWritten");
    assert_eq!(loaded, None);
}

#[test]
fn corrupt_payload_is_contained_to_none() {
    let mut store = MemoryStore::new();
    store.set_raw("lastAnalysis", "{not valid json");
    let loaded: Option<AnalysisSummary> = load_json(&store, "lastAnalysis");
    assert_eq!(loaded, None);
}

#[test]
fn write_failure_is_contained_to_false() {
    let mut store = MemoryStore::new();
    store.fail_writes = true;
    assert!(!save_json(&mut store, "lastAnalysis", &sample_summary()));
    assert_eq!(store.raw("lastAnalysis"), None);
}

#[test]
fn read_failure_is_contained_to_none() {
    let mut store = MemoryStore::new();
    assert!(save_json(&mut store, "lastAnalysis", &sample_summary()));
    store.fail_reads = true;
    let loaded: Option<AnalysisSummary> = load_json(&store, "lastAnalysis");
    assert_eq!(loaded, None);
}

#[test]
fn type_mismatch_on_read_yields_none() {
    let mut store = MemoryStore::new();
    assert!(save_json(&mut store, "count", &42u32));
    let loaded: Option<AnalysisSummary> = load_json(&store, "count");
    assert_eq!(loaded, None);
}
