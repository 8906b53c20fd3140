//! Application configuration
//!
//! This module combines command-line verbosity with the layered
//! [`PrimerConfig`] into the settings the rest of the application reads.

use crate::config::PrimerConfig;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Settings resolved from files, environment and flags
    pub settings: PrimerConfig,
    /// Configuration files that were applied, in load order
    pub config_files: Vec<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration with default settings
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            settings: PrimerConfig::default(),
            config_files: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: PrimerConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_config_files(mut self, files: Vec<PathBuf>) -> Self {
        self.config_files = files;
        self
    }

    /// Force strict exit behavior on (flags can only tighten it)
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.settings.strict |= strict;
        self
    }

    /// Turn prompts off (flags can only silence them)
    pub fn without_prompts(mut self, no_prompt: bool) -> Self {
        if no_prompt {
            self.settings.prompts = false;
        }
        self
    }

    /// Get the log filter based on verbosity, falling back to the configured level
    pub fn log_level(&self) -> String {
        match self.verbose {
            0 => self
                .settings
                .log_level
                .clone()
                .unwrap_or_else(|| "warn".to_string()),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}
