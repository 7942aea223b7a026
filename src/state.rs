use std::time::Duration;

use rand::Rng;

use serde::{ Deserialize, Serialize };

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::errors::GenerateError;
use crate::generators::{ CharacterClass, OptionSet };
use crate::password::{ GenerationRequest, Password, generate };
use crate::strength::{ StrengthResult, score };

pub const MAX_LENGTH: usize = 20;
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Everything the generator form shows. Strength is recomputed on every
/// length or option change; the password only changes on `generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StateRecord")]
pub struct GeneratorState {
    length: usize,
    options: OptionSet,
    password: Password,
    copied: bool,
    strength: StrengthResult,
    #[serde(skip)]
    reset_delay: Duration,
    #[serde(skip)]
    pending_resets: Vec<Duration>,
}

/// Serialized form as read back. Strength is derived, and `copied` has no
/// timer left to clear it, so neither is restored.
#[derive(Deserialize)]
struct StateRecord {
    length: usize,
    options: OptionSet,
    password: Password,
}

impl From<StateRecord> for GeneratorState {
    fn from(record: StateRecord) -> Self {
        let mut state = Self::new(record.length, record.options);
        state.password = record.password;
        state
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(10, OptionSet::default())
    }
}

impl GeneratorState {
    pub fn new(length: usize, options: OptionSet) -> Self {
        let length = length.min(MAX_LENGTH);

        Self {
            length,
            options,
            password: Password::placeholder(),
            copied: false,
            strength: score(length, &options),
            reset_delay: DEFAULT_RESET_DELAY,
            pending_resets: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(config.length, config.options);
        state.reset_delay = Duration::from_millis(config.copy_reset_ms);
        state
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn options(&self) -> OptionSet {
        self.options
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn strength(&self) -> StrengthResult {
        self.strength
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length.min(MAX_LENGTH);
        self.refresh_strength();
    }

    pub fn set_option(&mut self, class: CharacterClass, enabled: bool) {
        self.options.set(class, enabled);
        self.refresh_strength();
    }

    pub fn toggle_option(&mut self, class: CharacterClass) {
        self.options.toggle(class);
        self.refresh_strength();
    }

    fn refresh_strength(&mut self) {
        self.strength = score(self.length, &self.options);
        log::debug!(
            "length {} with {} classes scores {}",
            self.length,
            self.options.enabled_count(),
            self.strength.label
        );
    }

    /// Replaces the password and clears `copied`. On error the previous
    /// password is kept.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Password, GenerateError> {
        let request = GenerationRequest {
            length: self.length,
            options: self.options,
        };

        self.password = generate(&request, rng)?;
        self.copied = false;

        Ok(&self.password)
    }

    /// Copies the current password. Failures are logged and swallowed.
    /// Returns whether the write succeeded.
    pub fn copy<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C, now: Duration) -> bool {
        match clipboard.write_text(self.password.as_str()) {
            Ok(()) => {
                self.copied = true;
                self.pending_resets.push(now + self.reset_delay);
                true
            }
            Err(e) => {
                log::error!("Failed to copy: {}", e);
                false
            }
        }
    }

    /// Fires every reset timer due at `now`. Each timer clears `copied`
    /// on its own, regardless of copies made after it was scheduled.
    pub fn tick(&mut self, now: Duration) {
        self.pending_resets.sort();

        let due = self.pending_resets.partition_point(|deadline| *deadline <= now);
        for deadline in self.pending_resets.drain(..due) {
            log::debug!("copy reset timer fired at {:?}", deadline);
            self.copied = false;
        }
    }

    pub fn pending_resets(&self) -> usize {
        self.pending_resets.len()
    }
}
