//! Canonical deep links

use crate::constants::DEFAULT_LOCALE;

/// Referral link `<base>?ref=<code>`, or `None` for an empty code.
///
/// The code is inserted byte for byte with no percent-encoding; callers
/// hand over codes that are already URL-safe.
pub fn referral_url(base: &str, code: &str) -> Option<String> {
    if code.is_empty() {
        return None;
    }
    Some(format!("{}?ref={}", base, code))
}

/// "Book now" link `<base>/<locale>`, falling back to English
pub fn booking_url(base: &str, locale: Option<&str>) -> String {
    let locale = locale.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LOCALE);
    format!("{}/{}", base.trim_end_matches('/'), locale)
}
