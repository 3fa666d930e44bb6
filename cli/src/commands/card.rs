//! Card command implementation.

use std::path::Path;

use viajero_card_core::referral::{booking_url, referral_url};
use viajero_card_core::{Config, MemberSnapshot, MembershipCard};

/// Member fields given on the command line
pub struct MemberOverrides {
    pub number: Option<String>,
    pub tier_color: Option<String>,
    pub stays: Option<i64>,
    pub nights: Option<i64>,
}

impl MemberOverrides {
    fn apply(self, member: &mut MemberSnapshot) {
        if let Some(number) = self.number {
            member.loyalty_number = number;
        }
        if let Some(color) = self.tier_color {
            member.tier_color = Some(color);
        }
        if let Some(stays) = self.stays {
            member.year_stats.total_stays = stays;
        }
        if let Some(nights) = self.nights {
            member.year_stats.total_nights = nights;
        }
    }
}

/// Compose the membership card and print it as JSON.
pub fn show_card(
    config: &Config,
    member_file: Option<&Path>,
    overrides: MemberOverrides,
    locale: Option<&str>,
) -> anyhow::Result<()> {
    let mut member: MemberSnapshot = match member_file {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => MemberSnapshot::default(),
    };
    overrides.apply(&mut member);

    let card = MembershipCard::compose(config, &member);
    tracing::debug!("composed card for tier color {:?}", member.tier_color);

    let output = serde_json::json!({
        "card": card,
        "links": {
            "book_now": booking_url(&config.booking_base_url, locale),
            // The referral code is the loyalty number
            "referral": referral_url(&config.referral_base_url, &member.loyalty_number),
        },
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
