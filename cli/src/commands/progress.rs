//! Progress command implementation.

use viajero_card_core::card::{MetricProgress, TierProgress, YearStats};
use viajero_card_core::Config;

/// Print the ring fills for this membership year's counters.
pub fn show_progress(config: &Config, stays: i64, nights: i64) {
    let stats = YearStats {
        total_stays: stays,
        total_nights: nights,
    };
    let progress = TierProgress::from_stats(&stats, &config.targets);

    print_metric("Stays", &progress.stays);
    print_metric("Nights", &progress.nights);
}

fn print_metric(label: &str, metric: &MetricProgress) {
    let mark = if metric.is_complete() { "\x1b[1;32m✓\x1b[0m" } else { " " };
    println!(
        "{} \x1b[1m{:<7}\x1b[0m {} of {}  {:>5.1}%  dasharray \"{}\"",
        mark,
        label,
        metric.current,
        metric.target,
        metric.fraction * 100.0,
        metric.ring().dasharray(),
    );
}
