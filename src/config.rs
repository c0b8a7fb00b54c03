use anyhow::{Context, Result};
use directories::ProjectDirs;
use gradebook_core::DEFAULT_HOURLY_WAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::{CliArgs, OutputFormat};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub payroll: PayrollConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct PayrollConfig {
    pub default_hourly_wage: f64,
    pub hours_worked: f64,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            payroll: PayrollConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_hourly_wage: DEFAULT_HOURLY_WAGE,
            hours_worked: 40.0,
            currency: "Tk".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "gradebook")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("gradebook.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config)?;

        // CLI args override config file
        if let Some(hours) = cli_args.hours {
            config.payroll.hours_worked = hours;
        }
        if let Some(format) = cli_args.format {
            config.output.format = format;
        }
        if let Some(log_level) = cli_args.log_level {
            config.output.log_level = log_level;
        }

        Ok(config)
    }
}
