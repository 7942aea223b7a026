use std::fmt;

use rand::Rng;

use serde::{ Deserialize, Serialize };

use crate::errors::GenerateError;
use crate::generators::OptionSet;

pub const PLACEHOLDER: &str = "P4$5W0rD!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn placeholder() -> Self {
        Self(String::from(PLACEHOLDER))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub options: OptionSet,
}

/// Draws `request.length` characters uniformly, with replacement, from the
/// union of the enabled alphabets.
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    if request.length == 0 {
        return Ok(Password(String::new()));
    }

    let alphabet = request.options.alphabet();
    if alphabet.is_empty() {
        return Err(GenerateError::InvalidOptions {
            length: request.length,
        });
    }

    let password = (0..request.length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();

    Ok(Password(password))
}
