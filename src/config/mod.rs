//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! theme, log level, simulated operation delays and notice lifetime.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::ui::Theme;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/freeness-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub theme_name: String,
    pub log_level: String,
    pub save_draft_delay_ms: u64,
    pub publish_delay_ms: u64,
    pub post_job_delay_ms: u64,
    pub sign_in_delay_ms: u64,
    pub notice_ttl_ticks: u16,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_save_draft_delay_ms")]
    pub save_draft_delay_ms: u64,
    #[serde(default = "default_publish_delay_ms")]
    pub publish_delay_ms: u64,
    #[serde(default = "default_post_job_delay_ms")]
    pub post_job_delay_ms: u64,
    #[serde(default = "default_sign_in_delay_ms")]
    pub sign_in_delay_ms: u64,
    #[serde(default = "default_notice_ttl_ticks")]
    pub notice_ttl_ticks: u16,
}

fn default_theme_name() -> String {
    "medina".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_save_draft_delay_ms() -> u64 {
    1000
}

fn default_publish_delay_ms() -> u64 {
    1500
}

fn default_post_job_delay_ms() -> u64 {
    1500
}

fn default_sign_in_delay_ms() -> u64 {
    400
}

fn default_notice_ttl_ticks() -> u16 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            save_draft_delay_ms: default_save_draft_delay_ms(),
            publish_delay_ms: default_publish_delay_ms(),
            post_job_delay_ms: default_post_job_delay_ms(),
            sign_in_delay_ms: default_sign_in_delay_ms(),
            notice_ttl_ticks: default_notice_ttl_ticks(),
            file_path: None,
        }
    }

    /// Load the configuration from the custom directory if provided, or the
    /// default one otherwise. A missing file is created with the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
            self.save_draft_delay_ms = data.save_draft_delay_ms;
            self.publish_delay_ms = data.publish_delay_ms;
            self.post_job_delay_ms = data.post_job_delay_ms;
            self.sign_in_delay_ms = data.sign_in_delay_ms;
            self.notice_ttl_ticks = data.notice_ttl_ticks;
        } else {
            self.save()?;
        }
        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
            save_draft_delay_ms: self.save_draft_delay_ms,
            publish_delay_ms: self.publish_delay_ms,
            post_job_delay_ms: self.post_job_delay_ms,
            sign_in_delay_ms: self.sign_in_delay_ms,
            notice_ttl_ticks: self.notice_ttl_ticks,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// The configured theme.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(self.theme_name.clone()))
    }

    /// The configured log level.
    ///
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_creates_file_with_defaults() {
        let dir = tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert!(dir.path().join(FILE_NAME).exists());
        assert_eq!(config.publish_delay_ms, 1500);
        assert_eq!(config.theme().unwrap().name, "medina");
    }

    #[test]
    fn load_reads_partial_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "theme_name: sahara\nsave_draft_delay_ms: 10\n",
        )
        .unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "sahara");
        assert_eq!(config.save_draft_delay_ms, 10);
        assert_eq!(config.sign_in_delay_ms, 400);
    }

    #[test]
    fn save_round_trips() {
        let dir = tempdir().unwrap();
        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        config.notice_ttl_ticks = 7;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.path().to_str()).unwrap();
        assert_eq!(reloaded.notice_ttl_ticks, 7);
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "publish_delay_ms: soon\n").unwrap();
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.path().to_str()),
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
    }

    #[test]
    fn unknown_values_are_reported() {
        let config = Config {
            theme_name: "neon".to_string(),
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(config.theme(), Err(ConfigError::UnknownTheme(_))));
        assert!(matches!(
            config.level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
        assert_eq!(Config::new().level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn save_without_path_fails() {
        assert!(matches!(
            Config::new().save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
