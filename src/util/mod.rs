mod csv;
mod debounce;
mod download;
mod storage;

pub use csv::{validate_and_report, validate_csv, CsvValidation, FileMeta, MAX_CSV_BYTES};
pub use debounce::Debouncer;
pub use download::{
    download_json, download_text, json_artifact, text_artifact, DownloadArtifact, DownloadSink,
    MemorySink,
};
pub use storage::{load_json, save_json, KeyValueStore, MemoryStore, StorageError};
