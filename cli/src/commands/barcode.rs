//! Barcode command implementation.

use std::path::Path;

use viajero_card_core::barcode;
use viajero_card_core::card::format_loyalty_number;
use viajero_card_core::Config;

/// Print the width codes and geometry of a loyalty number's barcode.
pub fn show_barcode(
    config: &Config,
    number: &str,
    height: Option<f64>,
    color: &str,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut style = config.barcode;
    if let Some(height) = height {
        anyhow::ensure!(height.is_finite() && height > 0.0, "height must be positive");
        style.height = height;
    }

    let sequence = barcode::encode(number);
    let rendered = barcode::render(&sequence, &style);
    let (display_w, display_h) = rendered.display_size(style.max_width);

    println!("\n\x1b[1mLoyalty number:\x1b[0m {}", format_loyalty_number(number));
    println!("\x1b[1mCodes:\x1b[0m          {}", sequence.codes().join(" "));
    println!("\x1b[1mBars:\x1b[0m           {}", rendered.bars.len());
    println!("\x1b[1mSize:\x1b[0m           {} x {}", rendered.width, rendered.height);
    println!("\x1b[1mDisplayed at:\x1b[0m   {:.1} x {:.1}", display_w, display_h);

    if let Some(path) = out {
        std::fs::write(path, rendered.to_svg(color))?;
        println!("\n\x1b[1;32m✓\x1b[0m Wrote {}", path.display());
    }
    println!();

    Ok(())
}
