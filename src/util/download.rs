//! Save-as export helpers.
//!
//! The crate builds a complete in-memory artifact; the host's `DownloadSink`
//! performs the platform save-as in one scoped sequence (allocate transient
//! resources, trigger, release) before `deliver` returns. Nothing is left for
//! garbage collection or `Drop` ordering.

use serde::Serialize;
use tracing::debug;

use crate::error::VizResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Host-side save-as trigger.
pub trait DownloadSink {
    /// Consumes the artifact, completing the save-as and releasing every
    /// transient resource before returning.
    fn deliver(&mut self, artifact: DownloadArtifact) -> VizResult<()>;
}

#[must_use]
pub fn text_artifact(filename: impl Into<String>, text: &str) -> DownloadArtifact {
    DownloadArtifact {
        filename: filename.into(),
        mime: "text/plain",
        bytes: text.as_bytes().to_vec(),
    }
}

/// Pretty-printed JSON artifact (two-space indentation).
pub fn json_artifact<T: Serialize>(
    filename: impl Into<String>,
    value: &T,
) -> VizResult<DownloadArtifact> {
    let pretty = serde_json::to_string_pretty(value)?;
    Ok(DownloadArtifact {
        filename: filename.into(),
        mime: "application/json",
        bytes: pretty.into_bytes(),
    })
}

pub fn download_text(
    sink: &mut impl DownloadSink,
    filename: impl Into<String>,
    text: &str,
) -> VizResult<()> {
    let artifact = text_artifact(filename, text);
    debug!(filename = %artifact.filename, bytes = artifact.bytes.len(), "download text");
    sink.deliver(artifact)
}

pub fn download_json<T: Serialize>(
    sink: &mut impl DownloadSink,
    filename: impl Into<String>,
    value: &T,
) -> VizResult<()> {
    let artifact = json_artifact(filename, value)?;
    debug!(filename = %artifact.filename, bytes = artifact.bytes.len(), "download json");
    sink.deliver(artifact)
}

/// Recording sink for tests and headless usage.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub delivered: Vec<DownloadArtifact>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, artifact: DownloadArtifact) -> VizResult<()> {
        self.delivered.push(artifact);
        Ok(())
    }
}
