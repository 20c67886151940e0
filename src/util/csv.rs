use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::view::{Page, StatusBanner};

/// Upload size cap: 10 MiB.
pub const MAX_CSV_BYTES: u64 = 10 * 1024 * 1024;

/// Name and size of a host-selected file; contents never cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
}

impl FileMeta {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvValidation {
    Valid,
    MissingFile,
    WrongExtension,
    TooLarge,
}

impl CsvValidation {
    #[must_use]
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }

    /// Banner message for this outcome.
    ///
    /// A wrong extension is rejected without a message, matching the upload
    /// form's behavior of leaving the picker state untouched.
    #[must_use]
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            Self::Valid | Self::WrongExtension => None,
            Self::MissingFile => Some("Silakan pilih file terlebih dahulu"),
            Self::TooLarge => Some("File terlalu besar. Maksimum 10MB"),
        }
    }
}

#[must_use]
pub fn validate_csv(file: Option<&FileMeta>) -> CsvValidation {
    let Some(file) = file else {
        return CsvValidation::MissingFile;
    };
    if !file.name.ends_with(".csv") {
        return CsvValidation::WrongExtension;
    }
    if file.size_bytes > MAX_CSV_BYTES {
        return CsvValidation::TooLarge;
    }
    CsvValidation::Valid
}

/// Validates and shows the failure message on the error banner when one
/// exists. Returns whether the file passed.
pub fn validate_and_report(
    file: Option<&FileMeta>,
    banner: &mut StatusBanner,
    page: &mut Page,
    now: DateTime<Utc>,
) -> bool {
    let outcome = validate_csv(file);
    if let Some(message) = outcome.user_message() {
        banner.show_error(page, message, now);
    }
    if !outcome.is_valid() {
        warn!(outcome = ?outcome, "csv validation failed");
    }
    outcome.is_valid()
}
