use crate::error::{ErrorCode, PrimerError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// Name of the per-directory configuration file
pub const PROJECT_CONFIG_FILE: &str = "primer.toml";

/// Get the global Primer configuration directory
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "primer", "primer").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Effective settings shared by every program
#[derive(Debug, Clone, PartialEq)]
pub struct PrimerConfig {
    /// Fail the process when a program reports an input or domain error
    pub strict: bool,
    /// Print prompt text before each read
    pub prompts: bool,
    /// Tracing filter used when no `-v` flag is given
    pub log_level: Option<String>,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        Self {
            strict: false,
            prompts: true,
            log_level: None,
        }
    }
}

/// One configuration file. Every key is optional so that a project file can
/// override a single global setting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub strict: Option<bool>,
    pub prompts: Option<bool>,
    pub log_level: Option<String>,
}

impl PrimerConfig {
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(strict) = file.strict {
            self.strict = strict;
        }
        if let Some(prompts) = file.prompts {
            self.prompts = prompts;
        }
        if file.log_level.is_some() {
            self.log_level = file.log_level;
        }
    }

    /// Apply `PRIMER_*` overrides from an arbitrary variable lookup
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = lookup("PRIMER_STRICT") {
            self.strict = env_bool("PRIMER_STRICT", &value)?;
        }

        if let Some(value) = lookup("PRIMER_PROMPTS") {
            self.prompts = env_bool("PRIMER_PROMPTS", &value)?;
        }

        if let Some(log_level) = lookup("PRIMER_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        Ok(())
    }
}

fn env_bool(key: &str, value: &str) -> Result<bool> {
    parse_bool(value).ok_or_else(|| {
        PrimerError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("{key}={value:?} is not a boolean (expected true or false)"),
            None,
        )
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
