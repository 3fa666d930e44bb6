//! Loyalty number to bar/space width codes
//!
//! The table is a simplified visual approximation of Code 128 and is not
//! scanner-compliant: there is no checksum and the start/stop codes are fixed.
//! It is kept exactly as is because the rendered card depends on it.

use serde::{Deserialize, Serialize};

/// Decimal digit with a fixed width code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    /// Map an ASCII digit; anything else has no encoding
    pub fn from_char(c: char) -> Option<Self> {
        let digit = match c {
            '0' => Digit::Zero,
            '1' => Digit::One,
            '2' => Digit::Two,
            '3' => Digit::Three,
            '4' => Digit::Four,
            '5' => Digit::Five,
            '6' => Digit::Six,
            '7' => Digit::Seven,
            '8' => Digit::Eight,
            '9' => Digit::Nine,
            _ => return None,
        };
        Some(digit)
    }

    /// Six alternating bar/space widths, bar first
    pub const fn widths(self) -> &'static str {
        match self {
            Digit::Zero => "212222",
            Digit::One => "222122",
            Digit::Two => "222221",
            Digit::Three => "121223",
            Digit::Four => "121322",
            Digit::Five => "131222",
            Digit::Six => "122213",
            Digit::Seven => "122312",
            Digit::Eight => "132212",
            Digit::Nine => "221213",
        }
    }
}

/// One entry of a width-code sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Start,
    Digit(Digit),
    /// Seven units wide so the end of the code reads differently
    Stop,
}

impl Symbol {
    pub const fn widths(self) -> &'static str {
        match self {
            Symbol::Start => "211214",
            Symbol::Digit(d) => d.widths(),
            Symbol::Stop => "2331112",
        }
    }
}

/// Ordered width codes: start, one per digit, stop
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WidthCodeSequence {
    symbols: Vec<Symbol>,
}

impl WidthCodeSequence {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Never true: start and stop are always present
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Width code strings in order, e.g. `["211214", "222122", "2331112"]`
    pub fn codes(&self) -> Vec<&'static str> {
        self.symbols.iter().map(|s| s.widths()).collect()
    }

    /// Flattened stream of unit widths across all codes
    pub fn units(&self) -> impl Iterator<Item = u32> + '_ {
        self.symbols
            .iter()
            .flat_map(|s| s.widths().bytes())
            .map(|b| u32::from(b - b'0'))
    }

    /// Sum of every unit width in the sequence
    pub fn total_units(&self) -> u32 {
        self.units().sum()
    }
}

/// Encode a loyalty number into width codes.
///
/// Non-digit characters are skipped, so any input is accepted; an input
/// without digits yields just the start and stop codes.
pub fn encode(value: &str) -> WidthCodeSequence {
    let mut symbols = vec![Symbol::Start];
    symbols.extend(value.chars().filter_map(Digit::from_char).map(Symbol::Digit));
    symbols.push(Symbol::Stop);

    WidthCodeSequence { symbols }
}
