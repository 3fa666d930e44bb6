//! Contrast command implementation.

use viajero_card_core::card::{ContrastColor, Rgb};

/// Print the luminance of a background and the foreground drawn on it.
pub fn show_contrast(color: &str) {
    let contrast = ContrastColor::for_background(color);

    match Rgb::parse_hex(color) {
        Some(rgb) => println!("\x1b[1mLuminance:\x1b[0m  {:.3}", rgb.luminance()),
        None => println!("\x1b[2mNot a #RRGGBB color, treating as dark\x1b[0m"),
    }
    println!("\x1b[1mForeground:\x1b[0m {} ({:?})", contrast.hex(), contrast);
}
