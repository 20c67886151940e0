use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::color::Rgba;
use crate::error::{VizError, VizResult};

/// Category-share input for the distribution doughnut: label -> review count,
/// with one slice color per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionData {
    entries: IndexMap<String, u64>,
    colors: Vec<Rgba>,
}

impl DistributionData {
    pub fn new(entries: IndexMap<String, u64>, colors: Vec<Rgba>) -> VizResult<Self> {
        if colors.len() != entries.len() {
            return Err(VizError::InvalidData(format!(
                "distribution colors ({}) must match categories ({})",
                colors.len(),
                entries.len()
            )));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { entries, colors })
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.values().copied()
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parallel label/count/color sequences for the word-frequency bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyData {
    labels: Vec<String>,
    counts: Vec<u64>,
    colors: Vec<Rgba>,
}

impl FrequencyData {
    pub fn new(labels: Vec<String>, counts: Vec<u64>, colors: Vec<Rgba>) -> VizResult<Self> {
        if counts.len() != labels.len() || colors.len() != labels.len() {
            return Err(VizError::InvalidData(format!(
                "frequency sequences must be parallel: {} labels, {} counts, {} colors",
                labels.len(),
                counts.len(),
                colors.len()
            )));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self {
            labels,
            counts,
            colors,
        })
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    #[must_use]
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

/// Time-ordered confidence percentages for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSeries {
    label: String,
    values: Vec<f64>,
    tick_labels: Vec<String>,
}

impl ConfidenceSeries {
    pub fn new(
        label: impl Into<String>,
        values: Vec<f64>,
        tick_labels: Vec<String>,
    ) -> VizResult<Self> {
        if tick_labels.len() != values.len() {
            return Err(VizError::InvalidData(format!(
                "confidence tick labels ({}) must match values ({})",
                tick_labels.len(),
                values.len()
            )));
        }
        for value in &values {
            if !value.is_finite() {
                return Err(VizError::InvalidData(
                    "confidence values must be finite".to_owned(),
                ));
            }
        }
        Ok(Self {
            label: label.into(),
            values,
            tick_labels,
        })
    }

    /// Convenience constructor numbering ticks 1..=n.
    pub fn from_values(label: impl Into<String>, values: Vec<f64>) -> VizResult<Self> {
        let tick_labels = (1..=values.len()).map(|i| i.to_string()).collect();
        Self::new(label, values, tick_labels)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn tick_labels(&self) -> &[String] {
        &self.tick_labels
    }
}
