//! CLI command implementations.

mod barcode;
mod card;
mod contrast;
mod progress;
mod referral;

pub use barcode::show_barcode;
pub use card::{show_card, MemberOverrides};
pub use contrast::show_contrast;
pub use progress::show_progress;
pub use referral::show_referral;
