//! Declarative chart specifications handed to a `ChartBackend`.
//!
//! A `ChartSpec` is a fully materialized, backend-agnostic description of one
//! chart: kind, labeled datasets, and merged options. Tooltip text is computed
//! here as a pure function so hosts and tests consume identical strings.

use serde::{Deserialize, Serialize};

use super::options::{AxisOptions, ChartOptions, ChartOptionsOverride};
use crate::core::{ConfidenceSeries, DistributionData, FrequencyData, Rgba, ACCENT_COLOR};
use crate::error::{VizError, VizResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
    /// Per-point fill colors; empty means the backend's default fill.
    pub fill_colors: Vec<Rgba>,
    pub border_color: Option<Rgba>,
    pub border_width: f64,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
            fill_colors: Vec::new(),
            border_color: None,
            border_width: 0.0,
        }
    }

    #[must_use]
    pub fn with_fill_colors(mut self, fill_colors: Vec<Rgba>) -> Self {
        self.fill_colors = fill_colors;
        self
    }

    #[must_use]
    pub fn with_border(mut self, color: Rgba, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// How a backend should phrase the tooltip line for a hovered point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipLabelFormat {
    /// `"{label}: {value} {unit} ({share}%)"` where share is the point's
    /// rounded percentage of the dataset total.
    CountShare { unit: String },
    /// `"{series}: {value}%"`.
    SeriesPercent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    pub fn validate(&self) -> VizResult<()> {
        for dataset in &self.data.datasets {
            if dataset.values.len() != self.data.labels.len() {
                return Err(VizError::InvalidData(format!(
                    "dataset `{}` has {} values for {} labels",
                    dataset.label,
                    dataset.values.len(),
                    self.data.labels.len()
                )));
            }
            if !dataset.fill_colors.is_empty()
                && dataset.fill_colors.len() != dataset.values.len()
            {
                return Err(VizError::InvalidData(format!(
                    "dataset `{}` has {} fill colors for {} values",
                    dataset.label,
                    dataset.fill_colors.len(),
                    dataset.values.len()
                )));
            }
            for value in &dataset.values {
                if !value.is_finite() {
                    return Err(VizError::InvalidData(format!(
                        "dataset `{}` contains a non-finite value",
                        dataset.label
                    )));
                }
            }
            if !dataset.border_width.is_finite() || dataset.border_width < 0.0 {
                return Err(VizError::InvalidData(format!(
                    "dataset `{}` border width must be finite and >= 0",
                    dataset.label
                )));
            }
            for color in &dataset.fill_colors {
                color.validate()?;
            }
            if let Some(border) = dataset.border_color {
                border.validate()?;
            }
        }
        self.options.validate()
    }

    /// Tooltip line for one hovered point, per the configured label format.
    ///
    /// Returns `None` when no format is configured or the indices are out of
    /// range.
    #[must_use]
    pub fn tooltip_label(&self, dataset_index: usize, point_index: usize) -> Option<String> {
        let format = self.options.tooltip.label_format.as_ref()?;
        let dataset = self.data.datasets.get(dataset_index)?;
        let value = *dataset.values.get(point_index)?;

        match format {
            TooltipLabelFormat::CountShare { unit } => {
                let label = self.data.labels.get(point_index)?;
                let share = percentage_share(value, dataset.total());
                Some(format!(
                    "{label}: {} {unit} ({share}%)",
                    display_value(value)
                ))
            }
            TooltipLabelFormat::SeriesPercent => {
                Some(format!("{}: {}%", dataset.label, display_value(value)))
            }
        }
    }
}

/// Rounded percentage of `value` in `total`; a zero or negative total yields 0.
#[must_use]
pub(crate) fn percentage_share(value: f64, total: f64) -> i64 {
    if total <= 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as i64
}

fn display_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Doughnut spec for the sentiment distribution: 60% ring cutout, bottom
/// legend, count-plus-share tooltips in the backend's review unit.
#[must_use]
pub fn distribution_spec(data: &DistributionData) -> ChartSpec {
    let dataset = Dataset::new("", data.counts().map(|count| count as f64).collect())
        .with_fill_colors(data.colors().to_vec());

    ChartSpec {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: data.labels().map(str::to_owned).collect(),
            datasets: vec![dataset],
        },
        options: ChartOptions::dashboard_base().merged(ChartOptionsOverride {
            cutout_ratio: Some(0.6),
            tooltip_label_format: Some(TooltipLabelFormat::CountShare {
                unit: "ulasan".to_owned(),
            }),
            ..ChartOptionsOverride::default()
        }),
    }
}

/// Vertical-bar spec for word frequencies: legend hidden, integer y ticks from
/// zero, x labels pinned at 45 degrees.
#[must_use]
pub fn frequency_spec(data: &FrequencyData) -> ChartSpec {
    let dataset = Dataset::new(
        "Frekuensi Kata",
        data.counts().iter().map(|count| *count as f64).collect(),
    )
    .with_fill_colors(data.colors().to_vec())
    .with_border(ACCENT_COLOR, 1.0);

    let base = ChartOptions::dashboard_base();
    let hidden_legend = base.legend.clone().hidden();

    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: data.labels().to_vec(),
            datasets: vec![dataset],
        },
        options: base.merged(ChartOptionsOverride {
            legend: Some(hidden_legend),
            x_axis: Some(AxisOptions {
                tick_rotation_degrees: 45.0,
                ..AxisOptions::default()
            }),
            y_axis: Some(AxisOptions {
                begin_at_zero: true,
                step_size: Some(1.0),
                title: Some("Jumlah Kemunculan".to_owned()),
                ..AxisOptions::default()
            }),
            ..ChartOptionsOverride::default()
        }),
    }
}

/// Line spec for confidence over time: y axis fixed to the percentage domain.
#[must_use]
pub fn confidence_spec(series: &ConfidenceSeries) -> ChartSpec {
    let dataset =
        Dataset::new(series.label(), series.values().to_vec()).with_border(ACCENT_COLOR, 2.0);

    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.tick_labels().to_vec(),
            datasets: vec![dataset],
        },
        options: ChartOptions::dashboard_base().merged(ChartOptionsOverride {
            tooltip_label_format: Some(TooltipLabelFormat::SeriesPercent),
            y_axis: Some(AxisOptions {
                begin_at_zero: true,
                max: Some(100.0),
                title: Some("Tingkat Kepercayaan (%)".to_owned()),
                ..AxisOptions::default()
            }),
            ..ChartOptionsOverride::default()
        }),
    }
}
