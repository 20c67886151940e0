mod backend;
mod manager;
mod options;
mod progress;
mod spec;

pub use backend::{ChartBackend, NullBackend};
pub use manager::{ChartManager, ChartSlot};
pub use options::{
    AxisOptions, ChartOptions, ChartOptionsOverride, LegendOptions, LegendPosition,
    TooltipOptions,
};
pub use progress::{render_progress_bars, PROGRESS_MOUNT};
pub use spec::{
    confidence_spec, distribution_spec, frequency_spec, ChartData, ChartKind, ChartSpec,
    Dataset, TooltipLabelFormat,
};
