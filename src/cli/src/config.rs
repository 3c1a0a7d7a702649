use color_eyre::eyre::WrapErr;
use log::debug;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Settings read from `config.toml`. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Search depth used when a subcommand is not given `--depth`.
    pub default_depth: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self { default_depth: 6 }
    }
}

impl Config {
    /// `cube3/config.toml` under the platform's user configuration directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cube3").join("config.toml"))
    }

    /// Read an explicitly named file, which must exist, or else the default
    /// file if there is one.
    pub fn load(explicit: Option<&Path>) -> color_eyre::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Reading configuration from {}", path.display());
        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
