//! Referral command implementation.

use std::path::Path;

use viajero_card_core::referral::SvgSlot;
use viajero_card_core::{Config, EngineCell, ReferralArtifactBuilder};

use crate::ui::{print_banner, print_qr_code};

/// Render the referral QR code to the terminal and optionally to an SVG file.
pub async fn show_referral(
    config: &Config,
    code: &str,
    size: Option<u32>,
    out: Option<&Path>,
    data_uri: bool,
) -> anyhow::Result<()> {
    let size = size.unwrap_or(config.qr.size);
    let mut builder = ReferralArtifactBuilder::new(
        EngineCell::shared(),
        SvgSlot::new(),
        config.referral_base_url.clone(),
        config.qr.clone(),
    );

    let artifact = match builder.update(code, size).await? {
        Some(artifact) => artifact.clone(),
        None => {
            println!("\x1b[2mNo referral code, nothing to render.\x1b[0m");
            return Ok(());
        }
    };

    print_banner(&artifact);
    println!("\x1b[1;33mScan to sign up with this referral:\x1b[0m\n");
    print_qr_code(artifact.handle.artifact());
    println!("\n\x1b[1mLink:\x1b[0m {}", artifact.url);

    if data_uri {
        println!("\n{}", artifact.handle.artifact().data_uri());
    }

    if let (Some(path), Some(svg)) = (out, builder.slot().content()) {
        std::fs::write(path, svg)?;
        println!("\n\x1b[1;32m✓\x1b[0m Wrote {} ({}px)", path.display(), artifact.size);
    }
    println!();

    builder.teardown();
    Ok(())
}
