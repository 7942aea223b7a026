use std::fs::File;
use std::io::{ BufReader, ErrorKind };
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::errors::ConfigError;
use crate::generators::OptionSet;
use crate::state::MAX_LENGTH;

/// Defaults for the generator form, read from `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub length: usize,
    pub options: OptionSet,
    pub copy_reset_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 10,
            options: OptionSet::default(),
            copy_reset_ms: 2000,
        }
    }
}

impl Config {
    const APP_DIR: &str = "oktogen";
    const FILE_NAME: &str = "config.json";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Loads from `path`, or the default location when `None`. A missing
    /// file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => {
                log::debug!("no config directory on this platform, using defaults");
                return Ok(Self::default());
            }
        };

        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("loaded config from {}", path.display());

        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.length > MAX_LENGTH {
            log::warn!(
                "configured length {} exceeds {}, clamping",
                self.length,
                MAX_LENGTH
            );
            self.length = MAX_LENGTH;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"length": 16, "options": {"symbols": true}}"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.length, 16);
        assert_eq!(config.options, OptionSet::all());
        assert_eq!(config.copy_reset_ms, 2000);
    }

    #[test]
    fn oversized_length_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"length": 64}"#).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap().length, MAX_LENGTH);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ length: ").unwrap();

        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Json(_))
        ));
    }
}
