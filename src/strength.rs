use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::generators::OptionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            StrengthLabel::Weak => "WEAK",
            StrengthLabel::Medium => "MEDIUM",
            StrengthLabel::Strong => "STRONG",
            StrengthLabel::VeryStrong => "VERY STRONG",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub label: StrengthLabel,
    pub score: u8,
}

impl StrengthResult {
    pub const METER_BARS: usize = 4;

    /// Four-segment indicator, the first `score` segments filled.
    pub fn meter(&self) -> String {
        (0..Self::METER_BARS)
            .map(|i| if i < self.score as usize { '█' } else { '░' })
            .collect()
    }
}

impl fmt::Display for StrengthResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.label, self.meter())
    }
}

pub fn score(length: usize, options: &OptionSet) -> StrengthResult {
    let enabled = options.enabled_count();
    let mut points = 0;

    if length >= 8 {
        points += 1;
    }
    if length >= 12 {
        points += 1;
    }
    if enabled >= 3 {
        points += 1;
    }
    if enabled == 4 {
        points += 1;
    }

    // zero points still reports a score of 1
    let (label, score) = match points {
        0 | 1 => (StrengthLabel::Weak, 1),
        2 => (StrengthLabel::Medium, 2),
        3 => (StrengthLabel::Strong, 3),
        _ => (StrengthLabel::VeryStrong, 4),
    };

    StrengthResult { label, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> OptionSet {
        OptionSet {
            uppercase,
            lowercase,
            numbers,
            symbols,
        }
    }

    #[test]
    fn scoring_table() {
        let cases = [
            (8, opts(false, true, false, false), StrengthLabel::Weak, 1),
            (12, opts(true, true, true, false), StrengthLabel::Strong, 3),
            (12, opts(true, true, true, true), StrengthLabel::VeryStrong, 4),
            (4, opts(false, false, false, false), StrengthLabel::Weak, 1),
            (10, opts(true, true, true, false), StrengthLabel::Medium, 2),
            (7, opts(true, true, true, true), StrengthLabel::Medium, 2),
            (20, opts(true, false, false, false), StrengthLabel::Medium, 2),
            (0, opts(true, true, true, true), StrengthLabel::Medium, 2),
            (11, opts(true, true, true, true), StrengthLabel::Strong, 3),
        ];

        for (length, options, label, value) in cases {
            let result = score(length, &options);
            assert_eq!(result.label, label, "length {} options {:?}", length, options);
            assert_eq!(result.score, value, "length {} options {:?}", length, options);
        }
    }

    #[test]
    fn score_is_pure() {
        for length in 0..=20 {
            let options = opts(true, false, true, true);
            assert_eq!(score(length, &options), score(length, &options));
        }
    }

    #[test]
    fn meter_and_display() {
        let result = score(12, &OptionSet::all());
        assert_eq!(result.meter(), "████");
        assert_eq!(result.to_string(), "VERY STRONG ████");

        let weak = score(0, &OptionSet::none());
        assert_eq!(weak.meter(), "█░░░");
    }

    #[test]
    fn label_serialization() {
        let json = serde_json::to_string(&StrengthLabel::VeryStrong).unwrap();
        assert_eq!(json, "\"VERY_STRONG\"");
    }
}
