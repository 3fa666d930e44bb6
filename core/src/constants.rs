//! Centralized card constants
//!
//! Defaults the portal hard-codes for the membership card and its
//! artifacts. `Config::default()` is built from these.

use std::num::NonZeroU32;

/// Base of the referral deep link; the code is appended as `?ref=<code>`
pub const REFERRAL_BASE_URL: &str = "https://viajero.akintravel.com/signup";

/// Base of the "book now" link; the locale is appended as a path segment
pub const BOOKING_BASE_URL: &str = "https://viajerohostels.com";

/// Locale used for the booking link when none is known
pub const DEFAULT_LOCALE: &str = "en";

/// Brand brown, used when a tier has no color of its own
pub const BRAND_COLOR: &str = "#382108";

/// Foreground drawn on dark backgrounds
pub const LIGHT_FOREGROUND: &str = "#FFFFFF";

/// Foreground drawn on light backgrounds
pub const DARK_FOREGROUND: &str = BRAND_COLOR;

/// Barcode bar height in pixels
pub const BARCODE_HEIGHT: f64 = 48.0;

/// Widest the barcode is ever laid out, in pixels
pub const BARCODE_MAX_WIDTH: f64 = 180.0;

/// Referral QR side length in pixels
pub const QR_SIZE: u32 = 180;

/// Quiet margin around the QR modules in pixels
pub const QR_MARGIN: u32 = 10;

/// Stays needed in a membership year to fill the stays ring
pub const STAYS_TARGET: NonZeroU32 = match NonZeroU32::new(3) {
    Some(n) => n,
    None => panic!("stays target must be non-zero"),
};

/// Nights needed in a membership year to fill the nights ring
pub const NIGHTS_TARGET: NonZeroU32 = match NonZeroU32::new(7) {
    Some(n) => n,
    None => panic!("nights target must be non-zero"),
};

/// Dash length of a full progress ring (radius 42 in a 100x100 box)
pub const RING_CIRCUMFERENCE: f64 = 264.0;
