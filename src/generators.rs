use std::fmt;

use serde::{ Deserialize, Serialize };

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SPECIALS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// Union order used when assembling the sampling alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SPECIALS,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        };
        write!(f, "{}", name)
    }
}

/// Which character classes are enabled. Any subset is representable,
/// including the empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for OptionSet {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl OptionSet {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        }
    }

    pub fn only(class: CharacterClass) -> Self {
        let mut options = Self::none();
        options.set(class, true);
        options
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        let slot = match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Numbers => &mut self.numbers,
            CharacterClass::Symbols => &mut self.symbols,
        };
        *slot = enabled;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.set(class, !self.is_enabled(class));
    }

    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled().count()
    }

    /// Concatenation of the enabled alphabets in `CharacterClass::ALL` order.
    /// Empty when nothing is enabled.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_sizes() {
        assert_eq!(CharacterClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharacterClass::Numbers.alphabet().len(), 10);
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 26);
    }

    #[test]
    fn alphabet_union_follows_fixed_order() {
        let options = OptionSet {
            uppercase: false,
            lowercase: true,
            numbers: true,
            symbols: true,
        };
        let alphabet: String = options.alphabet().into_iter().collect();

        assert_eq!(alphabet, format!("{}{}{}", LOWERCASE, NUMBERS, SPECIALS));
        assert_eq!(OptionSet::all().alphabet().len(), 88);
        assert!(OptionSet::none().alphabet().is_empty());
    }

    #[test]
    fn toggle_and_count() {
        let mut options = OptionSet::default();
        assert_eq!(options.enabled_count(), 3);

        options.toggle(CharacterClass::Symbols);
        assert!(options.symbols);
        assert_eq!(options.enabled_count(), 4);

        options.toggle(CharacterClass::Uppercase);
        options.toggle(CharacterClass::Uppercase);
        assert!(options.uppercase);

        assert_eq!(OptionSet::only(CharacterClass::Numbers).enabled_count(), 1);
        assert_eq!(OptionSet::none().enabled_count(), 0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: OptionSet = serde_json::from_str(r#"{"symbols": true}"#).unwrap();
        assert_eq!(options, OptionSet::all());
    }
}
