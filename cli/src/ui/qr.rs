//! QR code display.

use viajero_card_core::referral::QrArtifact;

/// Print a QR artifact to the terminal.
///
/// Uses Unicode block characters for compact display where
/// each character represents 2 vertical modules.
pub fn print_qr_code(artifact: &QrArtifact) {
    let width = artifact.module_count;

    // Unicode block characters:
    // ▀ = top dark, bottom light
    // ▄ = top light, bottom dark
    // █ = both dark
    // (space) = both light

    let quiet = "  ";

    // Top quiet zone
    println!("{}{}", quiet, " ".repeat(width + 4));

    for y in (0..width).step_by(2) {
        let row: String = (0..width)
            .map(|x| match (artifact.is_dark(x, y), artifact.is_dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            })
            .collect();
        println!("{}  {}  ", quiet, row);
    }

    // Bottom quiet zone
    println!("{}{}", quiet, " ".repeat(width + 4));
}
