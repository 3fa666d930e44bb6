//! Membership card view model
//!
//! Ties the pure pieces together: the tier color picks the palette, the
//! palette's foreground strokes the barcode, and the year counters fill
//! the progress rings.

mod number;
mod palette;
mod progress;

pub use number::format_loyalty_number;
pub use palette::{is_light_color, CardPalette, ContrastColor, Rgb};
pub use progress::{
    fill_fraction, Metric, MetricProgress, ProgressTarget, ProgressTargets, RingDash,
    TierProgress, YearStats,
};

use serde::{Deserialize, Serialize};

use crate::barcode::{self, RenderedBarcode};
use crate::Config;

/// Primitive member values handed over by the membership SDK
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSnapshot {
    pub loyalty_number: String,
    pub tier_color: Option<String>,
    pub year_stats: YearStats,
}

/// Everything the presentation layer needs to draw the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipCard {
    pub palette: CardPalette,
    /// Width codes, for debugging and golden tests
    pub codes: Vec<String>,
    pub barcode: RenderedBarcode,
    /// Aspect-preserving size within the configured max width
    pub barcode_display: (f64, f64),
    pub barcode_svg: String,
    pub caption: String,
    pub progress: TierProgress,
}

impl MembershipCard {
    pub fn compose(config: &Config, member: &MemberSnapshot) -> Self {
        let palette =
            CardPalette::for_tier(member.tier_color.as_deref(), &config.default_tier_color);

        let sequence = barcode::encode(&member.loyalty_number);
        let rendered = barcode::render(&sequence, &config.barcode);
        let barcode_svg = rendered.to_svg(&palette.foreground);

        Self {
            codes: sequence.codes().into_iter().map(String::from).collect(),
            barcode_display: rendered.display_size(config.barcode.max_width),
            barcode_svg,
            barcode: rendered,
            caption: format_loyalty_number(&member.loyalty_number),
            progress: TierProgress::from_stats(&member.year_stats, &config.targets),
            palette,
        }
    }
}
