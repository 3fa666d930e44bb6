//! Terminal rendering of the referral banner and QR code.

mod banner;
mod qr;

pub use banner::print_banner;
pub use qr::print_qr_code;
