//! Declarative chart options shared by all three dashboard visualizations.
//!
//! `ChartOptions::dashboard_base` carries the shared defaults (bottom legend,
//! dark tooltip chrome); per-kind deltas are applied through the nested-merge
//! `ChartOptionsOverride`, mirroring how the spec builders layer configuration.

use serde::{Deserialize, Serialize};

use super::spec::TooltipLabelFormat;
use crate::core::Rgba;
use crate::error::{VizError, VizResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub display: bool,
    pub position: LegendPosition,
    pub padding: f64,
    pub use_point_style: bool,
    pub font_size: f64,
}

impl LegendOptions {
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.display = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    pub background: Rgba,
    pub title_font_size: f64,
    pub body_font_size: f64,
    pub padding: f64,
    pub corner_radius: f64,
    pub label_format: Option<TooltipLabelFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub begin_at_zero: bool,
    pub max: Option<f64>,
    pub step_size: Option<f64>,
    pub title: Option<String>,
    pub tick_rotation_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Inner-ring cutout fraction for doughnut charts.
    pub cutout_ratio: Option<f64>,
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    pub x_axis: Option<AxisOptions>,
    pub y_axis: Option<AxisOptions>,
}

impl ChartOptions {
    /// Shared defaults for every dashboard chart.
    #[must_use]
    pub fn dashboard_base() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            cutout_ratio: None,
            legend: LegendOptions {
                display: true,
                position: LegendPosition::Bottom,
                padding: 20.0,
                use_point_style: true,
                font_size: 12.0,
            },
            tooltip: TooltipOptions {
                background: Rgba::rgba(0, 0, 0, 0.8),
                title_font_size: 14.0,
                body_font_size: 12.0,
                padding: 12.0,
                corner_radius: 6.0,
                label_format: None,
            },
            x_axis: None,
            y_axis: None,
        }
    }

    /// Applies a per-kind delta on top of these options.
    ///
    /// Unset override fields keep the base value; the tooltip label format
    /// merges into the base tooltip without touching its chrome styling.
    #[must_use]
    pub fn merged(mut self, overlay: ChartOptionsOverride) -> Self {
        if let Some(cutout_ratio) = overlay.cutout_ratio {
            self.cutout_ratio = Some(cutout_ratio);
        }
        if let Some(legend) = overlay.legend {
            self.legend = legend;
        }
        if let Some(label_format) = overlay.tooltip_label_format {
            self.tooltip.label_format = Some(label_format);
        }
        if let Some(x_axis) = overlay.x_axis {
            self.x_axis = Some(x_axis);
        }
        if let Some(y_axis) = overlay.y_axis {
            self.y_axis = Some(y_axis);
        }
        self
    }

    pub fn validate(&self) -> VizResult<()> {
        if let Some(cutout) = self.cutout_ratio {
            if !cutout.is_finite() || !(0.0..1.0).contains(&cutout) {
                return Err(VizError::InvalidData(
                    "cutout ratio must be finite and in [0, 1)".to_owned(),
                ));
            }
        }
        for (name, value) in [
            ("legend padding", self.legend.padding),
            ("legend font size", self.legend.font_size),
            ("tooltip title font size", self.tooltip.title_font_size),
            ("tooltip body font size", self.tooltip.body_font_size),
            ("tooltip padding", self.tooltip.padding),
            ("tooltip corner radius", self.tooltip.corner_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VizError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        self.tooltip.background.validate()?;
        for axis in [self.x_axis.as_ref(), self.y_axis.as_ref()].into_iter().flatten() {
            validate_axis(axis)?;
        }
        Ok(())
    }
}

fn validate_axis(axis: &AxisOptions) -> VizResult<()> {
    if let Some(max) = axis.max {
        if !max.is_finite() {
            return Err(VizError::InvalidData("axis max must be finite".to_owned()));
        }
    }
    if let Some(step) = axis.step_size {
        if !step.is_finite() || step <= 0.0 {
            return Err(VizError::InvalidData(
                "axis step size must be finite and > 0".to_owned(),
            ));
        }
    }
    if !axis.tick_rotation_degrees.is_finite() {
        return Err(VizError::InvalidData(
            "axis tick rotation must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Per-kind delta merged over `ChartOptions::dashboard_base`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOptionsOverride {
    pub cutout_ratio: Option<f64>,
    pub legend: Option<LegendOptions>,
    pub tooltip_label_format: Option<TooltipLabelFormat>,
    pub x_axis: Option<AxisOptions>,
    pub y_axis: Option<AxisOptions>,
}
