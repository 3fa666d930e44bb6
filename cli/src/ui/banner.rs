//! Referral banner printed above the terminal QR code.

use viajero_card_core::ReferralArtifact;

/// Print a box naming the referral code, where the link points, and the QR geometry.
pub fn print_banner(referral: &ReferralArtifact) {
    println!();
    for line in banner_lines(referral) {
        println!("\x1b[1;33m{}\x1b[0m", line);
    }
    println!();
}

fn banner_lines(referral: &ReferralArtifact) -> Vec<String> {
    let qr = referral.handle.artifact();
    let body = [
        format!("Referral code {}", referral.code),
        link_host(&referral.url).to_string(),
        format!("{0}x{0} modules, {1}px", qr.module_count, qr.size),
    ];

    let width = body.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("╔{}╗", "═".repeat(width)));
    for text in &body {
        lines.push(format!("║ {:<w$} ║", text, w = width - 2));
    }
    lines.push(format!("╚{}╝", "═".repeat(width)));
    lines
}

/// Scheme and query stripped, e.g. `viajero.akintravel.com/signup`
fn link_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.split('?').next().unwrap_or(rest)
}
