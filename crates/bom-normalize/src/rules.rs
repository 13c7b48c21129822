//! Ordered unit-suffix rule tables.
//!
//! Rules are evaluated top to bottom and the first match wins, so the order of
//! each table is the tie-break policy: for resistors "r" beats "k" beats "m";
//! for capacitors the longer, cased suffixes come before the bare prefix
//! letter so that "p" never swallows "pF".

/// Rounding applied to a scaled magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// Keep full precision.
    None,
    /// Round half away from zero to the given number of decimal places.
    Decimals(i32),
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::None => value,
            Self::Decimals(places) => {
                let factor = 10f64.powi(places);
                (value * factor).round() / factor
            }
        }
    }
}

/// Resistor rule: a unit letter matched case-insensitively anywhere in the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorRule {
    pub letter: char,
    pub multiplier: f64,
    pub rounding: Rounding,
}

pub const RESISTOR_RULES: [ResistorRule; 3] = [
    ResistorRule {
        letter: 'r',
        multiplier: 1.0,
        rounding: Rounding::None,
    },
    ResistorRule {
        letter: 'k',
        multiplier: 1e3,
        rounding: Rounding::Decimals(2),
    },
    ResistorRule {
        letter: 'm',
        multiplier: 1e6,
        rounding: Rounding::Decimals(2),
    },
];

impl ResistorRule {
    fn is_letter(&self, ch: char) -> bool {
        ch.eq_ignore_ascii_case(&self.letter)
    }

    pub fn matches(&self, raw: &str) -> bool {
        raw.chars().any(|ch| self.is_letter(ch))
    }

    /// Remove every occurrence of the unit letter, in either case.
    ///
    /// Returns `None` when a unit letter is directly followed by a digit
    /// ("4k7", "2R2"): such values have no unambiguous reading.
    pub fn strip(&self, raw: &str) -> Option<String> {
        let mut chars = raw.trim().chars().peekable();
        let mut stripped = String::with_capacity(raw.len());
        while let Some(ch) = chars.next() {
            if !self.is_letter(ch) {
                stripped.push(ch);
            } else if chars.peek().is_some_and(char::is_ascii_digit) {
                return None;
            }
        }
        Some(stripped)
    }
}

/// Capacitor rule: an exact substring whose text before it is the number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitorRule {
    pub suffix: &'static str,
    pub multiplier: f64,
}

const PICO: f64 = 1e-12;
const NANO: f64 = 1e-9;
const MICRO: f64 = 1e-6;

pub const CAPACITOR_RULES: [CapacitorRule; 12] = [
    CapacitorRule {
        suffix: "pF",
        multiplier: PICO,
    },
    CapacitorRule {
        suffix: "pf",
        multiplier: PICO,
    },
    CapacitorRule {
        suffix: "p",
        multiplier: PICO,
    },
    CapacitorRule {
        suffix: "nF",
        multiplier: NANO,
    },
    CapacitorRule {
        suffix: "nf",
        multiplier: NANO,
    },
    CapacitorRule {
        suffix: "n",
        multiplier: NANO,
    },
    CapacitorRule {
        suffix: "uF",
        multiplier: MICRO,
    },
    CapacitorRule {
        suffix: "uf",
        multiplier: MICRO,
    },
    CapacitorRule {
        suffix: "u",
        multiplier: MICRO,
    },
    CapacitorRule {
        suffix: "\u{b5}F",
        multiplier: MICRO,
    },
    CapacitorRule {
        suffix: "\u{b5}f",
        multiplier: MICRO,
    },
    CapacitorRule {
        suffix: "\u{b5}",
        multiplier: MICRO,
    },
];

impl CapacitorRule {
    /// Split at the first occurrence of the suffix into the text before it
    /// and the text after it.
    pub fn split<'a>(&self, raw: &'a str) -> Option<(&'a str, &'a str)> {
        raw.find(self.suffix)
            .map(|pos| (&raw[..pos], &raw[pos + self.suffix.len()..]))
    }
}
