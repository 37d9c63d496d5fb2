//! Configuration for the snc driver.
//!
//! Settings come from an `snc.toml` file; command-line flags override them.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use snc_lex::config::{DEFAULT_MAX_NUMBER_LEN, DEFAULT_TAB_WIDTH};
use snc_lex::LexerConfig;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "snc.toml";

/// Driver configuration.
///
/// ```toml
/// [lexer]
/// max_number_len = 255
/// tab_width = 1
///
/// [output]
/// format = "text"
/// jobs = 0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Lexer limits.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Token dump settings.
    #[serde(default)]
    pub output: OutputSection,
}

/// `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerSection {
    /// Longest accepted numeric literal.
    #[serde(default = "default_max_number_len")]
    pub max_number_len: usize,

    /// Width of a tab in leading indentation.
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,
}

/// `[output]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputSection {
    /// Dump format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Worker threads; `0` means one per CPU.
    #[serde(default)]
    pub jobs: usize,
}

/// How the token dump is written.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One token per line
    #[default]
    Text,
    /// A JSON array of files with their tokens
    Json,
}

fn default_max_number_len() -> usize {
    DEFAULT_MAX_NUMBER_LEN
}

fn default_tab_width() -> u32 {
    DEFAULT_TAB_WIDTH
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_number_len: default_max_number_len(),
            tab_width: default_tab_width(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/snc/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| DriverError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// The lexer limits described by this configuration.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig {
            max_number_len: self.lexer.max_number_len,
            tab_width: self.lexer.tab_width,
        }
    }

    /// Worker thread count with `0` resolved to the number of CPUs.
    pub fn effective_jobs(&self) -> usize {
        match self.output.jobs {
            0 => num_cpus::get(),
            n => n,
        }
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("snc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("snc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
