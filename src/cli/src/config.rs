use std::{
    fs, io,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use cube_core::DEFAULT_SCRAMBLE_LENGTH;
use log::debug;
use serde::{Deserialize, Serialize};

/// Settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many moves `scramble` and `shuffle` use.
    pub scramble_length: usize,
    /// Draw facelets as colored blocks instead of colored letters.
    pub unicode_stickers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            unicode_stickers: true,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/cube/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("cube");
        path.push("config.toml");
        Some(path)
    }

    /// Load the config at `path`, or at [`Config::default_path`] if none is
    /// given. A missing default config is not an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let (path, explicit) = match path {
            Some(path) => (path.to_owned(), true),
            None => match Config::default_path() {
                Some(path) => (path, false),
                None => return Ok(Config::default()),
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {}", path.display()));
            }
        };

        Config::parse(&text).wrap_err_with(|| format!("Failed to parse {}", path.display()))
    }

    fn parse(text: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("scramble_length = 25").unwrap();
        assert_eq!(config.scramble_length, 25);
        assert!(config.unicode_stickers);
    }

    #[test]
    fn test_bad_config() {
        assert!(Config::parse("scramble_length = \"lots\"").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/cube/config.toml"))).is_err());
    }
}
