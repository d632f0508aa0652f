//! Config file locations and reading.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::Config;

/// Errors from reading a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The environment names no base directory to look in.
    NoConfigDir,
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl ConfigError {
    /// Whether there is simply no file to read.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::NoConfigDir => true,
            Self::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Self::Parse { .. } => false,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigDir => f.write_str("no config directory: set HOME or XDG_CONFIG_HOME"),
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "parse error in {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoConfigDir => None,
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Directory holding `config.toml`: `%APPDATA%\glyphrun` on Windows,
/// `$XDG_CONFIG_HOME/glyphrun` or `~/.config/glyphrun` elsewhere.
///
/// `None` when none of those variables holds an absolute path.
pub fn config_dir() -> Option<PathBuf> {
    dir_from_env(std::env::var_os)
}

/// Path to the config file inside [`config_dir`].
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub(super) fn dir_from_env(var: impl Fn(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    // Relative values are ignored, as the XDG base directory rules require.
    let absolute = |key: &'static str| var(key).map(PathBuf::from).filter(|p| p.is_absolute());
    let base = if cfg!(windows) {
        absolute("APPDATA")?
    } else {
        absolute("XDG_CONFIG_HOME")
            .or_else(|| absolute("HOME").map(|home| home.join(".config")))?
    };
    Some(base.join("glyphrun"))
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = toml::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("config: loaded from {}", path.display());
        Ok(cfg)
    }

    /// Load the default config file, keeping "missing" distinct from
    /// "broken".
    pub fn try_load_default() -> Result<Self, ConfigError> {
        Self::load(config_path().ok_or(ConfigError::NoConfigDir)?)
    }

    /// Load the default config file. Falls back to defaults when the file
    /// is missing or unreadable; problems other than absence are logged.
    pub fn load_default() -> Self {
        match Self::try_load_default() {
            Ok(cfg) => cfg,
            Err(e) => {
                if !e.is_missing() {
                    log::warn!("config: {e}");
                }
                Self::default()
            }
        }
    }
}
