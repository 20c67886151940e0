use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// sRGB color with 8-bit channels and a unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses a `#rrggbb` hex literal.
    pub fn from_hex(hex: &str) -> VizResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| VizError::InvalidColor(format!("missing `#` prefix in `{hex}`")))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(VizError::InvalidColor(format!(
                "expected 6 hex digits in `{hex}`"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| VizError::InvalidColor(format!("non-hex digit in `{hex}`")))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// CSS `rgba(...)` form used when handing styles to a DOM host.
    #[must_use]
    pub fn css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, self.alpha
        )
    }

    pub fn validate(self) -> VizResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(VizError::InvalidColor(
                "alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_round_trips_hex() {
        let color = Rgba::from_hex("#48bb78").expect("parse");
        assert_eq!(color, Rgba::rgb(0x48, 0xbb, 0x78));
        assert_eq!(color.to_hex(), "#48bb78");
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Rgba::from_hex("48bb78").is_err());
        assert!(Rgba::from_hex("#48bb7").is_err());
        assert!(Rgba::from_hex("#48bb7z").is_err());
    }

    #[test]
    fn css_form_keeps_fractional_alpha() {
        assert_eq!(Rgba::rgba(0, 0, 0, 0.8).css(), "rgba(0, 0, 0, 0.8)");
        assert_eq!(Rgba::rgb(255, 255, 255).css(), "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn validate_rejects_out_of_range_alpha() {
        assert!(Rgba::rgba(0, 0, 0, 1.5).validate().is_err());
        assert!(Rgba::rgba(0, 0, 0, f64::NAN).validate().is_err());
    }
}
