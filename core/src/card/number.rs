//! Printed caption for the loyalty number

/// Group the digits of a loyalty number in blocks of four.
///
/// Non-digits are dropped first; a short final block is kept as is.
pub fn format_loyalty_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();

    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
