//! Viajero Card Core - membership card artifacts
//!
//! This library turns the primitive values a membership SDK hands over
//! (loyalty number, tier color, stay counters, referral code) into the
//! card's visual artifacts: a linear barcode, a referral QR code, a
//! legible foreground color and progress-ring fills.

pub mod barcode;
pub mod card;
pub mod constants;
pub mod referral;

mod error;
mod svg;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

use barcode::BarcodeStyle;
use card::{ProgressTargets, Rgb};
use referral::QrStyle;

/// Configuration for the card artifacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Referral link base; the code is appended as `?ref=<code>`
    pub referral_base_url: String,
    /// Booking link base; the locale is appended as a path segment
    pub booking_base_url: String,
    /// Card background for tiers without a color
    pub default_tier_color: String,
    pub barcode: BarcodeStyle,
    pub qr: QrStyle,
    pub targets: ProgressTargets,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            referral_base_url: constants::REFERRAL_BASE_URL.to_string(),
            booking_base_url: constants::BOOKING_BASE_URL.to_string(),
            default_tier_color: constants::BRAND_COLOR.to_string(),
            barcode: BarcodeStyle::default(),
            qr: QrStyle::default(),
            targets: ProgressTargets::default(),
        }
    }
}

impl Config {
    /// Parse a JSON document; fields it leaves out keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values that would break the geometry
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::Config(format!("{} must be a positive number, got {}", name, value)))
            }
        };
        positive("barcode.height", self.barcode.height)?;
        positive("barcode.unit_width", self.barcode.unit_width)?;
        positive("barcode.max_width", self.barcode.max_width)?;

        for (name, color) in [
            ("default_tier_color", &self.default_tier_color),
            ("qr.dark_color", &self.qr.dark_color),
            ("qr.light_color", &self.qr.light_color),
        ] {
            if Rgb::parse_hex(color).is_none() {
                return Err(Error::Config(format!("{} must be #RRGGBB, got {:?}", name, color)));
            }
        }

        if u64::from(self.qr.margin) * 2 >= u64::from(self.qr.size) {
            return Err(Error::Config(format!(
                "qr.margin {} leaves no room in a {}px code",
                self.qr.margin, self.qr.size
            )));
        }

        Ok(())
    }
}

// Re-export key types for convenience
pub use card::{MemberSnapshot, MembershipCard};
pub use referral::{EngineCell, ReferralArtifact, ReferralArtifactBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.qr.size, 180);
        assert_eq!(config.targets.nights.get(), 7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{"qr": {"size": 240}, "barcode": {"height": 64}}"#).unwrap();
        assert_eq!(config.qr.size, 240);
        assert_eq!(config.qr.margin, 10);
        assert_eq!(config.barcode.height, 64.0);
        assert_eq!(config.barcode.max_width, 180.0);
        assert_eq!(config.referral_base_url, "https://viajero.akintravel.com/signup");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            Config::from_json(r#"{"barcode": {"unit_width": 0}}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"qr": {"dark_color": "brown"}}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"qr": {"size": 20, "margin": 10}}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(Config::from_json("{"), Err(Error::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(Config::load("/nonexistent/viajero.json"), Err(Error::Io(_))));
    }
}
