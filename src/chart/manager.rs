//! Chart lifecycle management.
//!
//! The manager owns the backend and one optional live handle per slot.
//! Rendering a slot destroys its previous handle before creating the new one,
//! so repeated analyze runs never accumulate chart instances.

use tracing::{debug, trace};

use super::backend::ChartBackend;
use super::spec::{confidence_spec, distribution_spec, frequency_spec, ChartSpec};
use crate::core::{ConfidenceSeries, DistributionData, FrequencyData};
use crate::error::VizResult;
use crate::view::Page;

/// The three fixed visualization roles tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    Distribution,
    Frequency,
    Confidence,
}

impl ChartSlot {
    pub const ALL: [Self; 3] = [Self::Distribution, Self::Frequency, Self::Confidence];

    /// Fixed mount-point id for this slot.
    #[must_use]
    pub fn mount_id(self) -> &'static str {
        match self {
            Self::Distribution => "sentimentChart",
            Self::Frequency => "wordChart",
            Self::Confidence => "confidenceChart",
        }
    }
}

pub struct ChartManager<B: ChartBackend> {
    backend: B,
    distribution: Option<B::Handle>,
    frequency: Option<B::Handle>,
    confidence: Option<B::Handle>,
}

impl<B: ChartBackend> ChartManager<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            distribution: None,
            frequency: None,
            confidence: None,
        }
    }

    /// Mounts present on `page` for this manager's slots.
    #[must_use]
    pub fn mounted_slots(page: &Page) -> Vec<ChartSlot> {
        ChartSlot::ALL
            .into_iter()
            .filter(|slot| page.contains(slot.mount_id()))
            .collect()
    }

    pub fn render_distribution(&mut self, page: &Page, data: &DistributionData) -> VizResult<()> {
        self.render_into(ChartSlot::Distribution, page, distribution_spec(data))
    }

    pub fn render_frequency(&mut self, page: &Page, data: &FrequencyData) -> VizResult<()> {
        self.render_into(ChartSlot::Frequency, page, frequency_spec(data))
    }

    pub fn render_confidence(&mut self, page: &Page, series: &ConfidenceSeries) -> VizResult<()> {
        self.render_into(ChartSlot::Confidence, page, confidence_spec(series))
    }

    /// Destroys every live handle and clears the slots. Idempotent.
    pub fn teardown(&mut self) {
        for slot in ChartSlot::ALL {
            if let Some(handle) = self.slot_mut(slot).take() {
                self.backend.destroy(handle);
                trace!(slot = ?slot, "chart destroyed");
            }
        }
        debug!("chart manager torn down");
    }

    #[must_use]
    pub fn slot_is_live(&self, slot: ChartSlot) -> bool {
        match slot {
            ChartSlot::Distribution => self.distribution.is_some(),
            ChartSlot::Frequency => self.frequency.is_some(),
            ChartSlot::Confidence => self.confidence.is_some(),
        }
    }

    #[must_use]
    pub fn live_slot_count(&self) -> usize {
        ChartSlot::ALL
            .into_iter()
            .filter(|slot| self.slot_is_live(*slot))
            .count()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn render_into(&mut self, slot: ChartSlot, page: &Page, spec: ChartSpec) -> VizResult<()> {
        let mount_id = slot.mount_id();
        if !page.contains(mount_id) {
            trace!(mount_id, "chart mount absent, skipping render");
            return Ok(());
        }

        // Destroy-then-create: at most one live handle per slot at any time.
        if let Some(previous) = self.slot_mut(slot).take() {
            self.backend.destroy(previous);
        }
        let handle = self.backend.create(mount_id, spec)?;
        *self.slot_mut(slot) = Some(handle);
        debug!(mount_id, "chart rendered");
        Ok(())
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<B::Handle> {
        match slot {
            ChartSlot::Distribution => &mut self.distribution,
            ChartSlot::Frequency => &mut self.frequency,
            ChartSlot::Confidence => &mut self.confidence,
        }
    }
}
