use std::env;
use std::path::PathBuf;

/// Number of columns on the board.
pub const HORIZONTAL: usize = 9;
/// Number of rows on the board.
pub const VERTICAL: usize = 5;

/// Save file used when `FANORONA_SAVE` is not set.
pub const DEFAULT_SAVE_FILE: &str = "fanorona.save";

/// Environment variable overriding the save file location.
pub const SAVE_ENV: &str = "FANORONA_SAVE";
/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "FANORONA_LOG";

/// Runtime configuration resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub save_path: PathBuf,
}

impl Config {
    /// Read the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match env::var_os(SAVE_ENV).filter(|p| !p.is_empty()) {
            Some(path) => Self {
                save_path: PathBuf::from(path),
            },
            None => Self::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_save_file_in_working_dir() {
        assert_eq!(Config::default().save_path, PathBuf::from(DEFAULT_SAVE_FILE));
    }
}
