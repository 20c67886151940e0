//! sentiviz: headless presentation layer for a sentiment-analysis dashboard.
//!
//! This crate owns a deterministic view model (`view::Page`), declarative chart
//! specifications, and the lifecycle discipline for live chart instances.
//! Concrete hosts (a WASM/DOM adapter, a desktop shell) plug in through the
//! `chart::ChartBackend`, `util::KeyValueStore`, and `util::DownloadSink`
//! traits and drive timers by supplying explicit clock values.

pub mod chart;
pub mod core;
pub mod error;
pub mod telemetry;
pub mod util;
pub mod view;

pub use chart::{ChartBackend, ChartManager, ChartSlot, NullBackend};
pub use error::{VizError, VizResult};
pub use view::{Element, Page};
