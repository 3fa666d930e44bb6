//! Referral deep link and its QR code

mod builder;
mod engine;
mod link;

pub use builder::{ArtifactHandle, Phase, ReferralArtifact, ReferralArtifactBuilder, SvgSlot, VisualSlot};
pub use engine::{EngineCell, ErrorCorrection, QrArtifact, QrEngine, QrStyle, StyledQrEngine};
pub use link::{booking_url, referral_url};
