mod color;
mod dataset;
mod format;
mod sentiment;

pub use color::Rgba;
pub use dataset::{ConfidenceSeries, DistributionData, FrequencyData};
pub use format::{
    capitalize, format_date, format_number, sanitize_html, time_ago, truncate_text,
    DEFAULT_TRUNCATE_CHARS,
};
pub use sentiment::{
    sentiment_color, sentiment_emoji, PercentageBreakdown, Sentiment, ACCENT_COLOR,
    FALLBACK_EMOJI,
};
