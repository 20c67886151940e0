use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::color::Rgba;

/// Accent color used wherever a sentiment class cannot be resolved.
pub const ACCENT_COLOR: Rgba = Rgba::rgb(0x66, 0x7e, 0xea);

/// Emoji shown for labels outside the known sentiment classes.
pub const FALLBACK_EMOJI: &str = "🤔";

/// Sentiment classes produced by the analysis backend.
///
/// Wire labels are the backend's Indonesian class names and are kept verbatim
/// so stored payloads and chart labels stay byte-compatible with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "positif")]
    Positive,
    #[serde(rename = "negatif")]
    Negative,
    #[serde(rename = "netral")]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positif",
            Self::Negative => "negatif",
            Self::Neutral => "netral",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    #[must_use]
    pub fn color(self) -> Rgba {
        match self {
            Self::Positive => Rgba::rgb(0x48, 0xbb, 0x78),
            Self::Negative => Rgba::rgb(0xf5, 0x65, 0x65),
            Self::Neutral => Rgba::rgb(0xed, 0x89, 0x36),
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
        }
    }

    /// CSS class applied to this sentiment's progress-bar fill.
    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Color for an arbitrary sentiment label, falling back to the accent color.
#[must_use]
pub fn sentiment_color(label: &str) -> Rgba {
    Sentiment::from_label(label).map_or(ACCENT_COLOR, Sentiment::color)
}

/// Emoji for an arbitrary sentiment label, falling back to a neutral marker.
#[must_use]
pub fn sentiment_emoji(label: &str) -> &'static str {
    Sentiment::from_label(label).map_or(FALLBACK_EMOJI, Sentiment::emoji)
}

/// Insertion-ordered mapping of sentiment label to integer percentage.
///
/// Values are expected in 0..=100 but deliberately not clamped; the progress
/// bar renderer reproduces whatever the analysis backend reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentageBreakdown {
    entries: IndexMap<String, u8>,
}

impl PercentageBreakdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, percentage: u8) {
        self.entries.insert(label.into(), percentage);
    }

    #[must_use]
    pub fn with(mut self, label: impl Into<String>, percentage: u8) -> Self {
        self.insert(label, percentage);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(label, pct)| (label.as_str(), *pct))
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
