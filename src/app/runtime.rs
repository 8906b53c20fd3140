//! Runtime initialization and setup
//!
//! This module resolves configuration and starts logging before any program runs.

use crate::app::{config::AppConfig, logging::init_logging};
use crate::config::{get_global_config_dir, ConfigLoader};
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Command-line inputs that shape the application configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOptions<'a> {
    pub verbose: u8,
    pub config_path: Option<&'a Path>,
    pub strict: bool,
    pub no_prompt: bool,
}

/// Where configuration is looked up besides the command line
pub struct ConfigSources<'a, F> {
    /// Working directory searched for `primer.toml`
    pub working_dir: &'a Path,
    /// Directory holding the global `config.toml`
    pub global_dir: Option<&'a Path>,
    /// Environment variable lookup
    pub env: F,
}

/// Resolve configuration from global, project/explicit file, environment and flags
pub fn resolve_config<F>(
    options: StartupOptions<'_>,
    sources: ConfigSources<'_, F>,
) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut loader = ConfigLoader::new();
    if let Some(dir) = sources.global_dir {
        loader.load_global(dir)?;
    }
    match options.config_path {
        Some(path) => loader.load_file(path)?,
        None => loader.load_project(sources.working_dir)?,
    }
    loader.merge_env(sources.env)?;
    let config_files = loader.sources().to_vec();

    Ok(AppConfig::new(options.verbose)
        .with_settings(loader.into_config())
        .with_config_files(config_files)
        .with_strict(options.strict)
        .without_prompts(options.no_prompt))
}

/// Initialize the application with proper logging and configuration
pub fn initialize_app(options: StartupOptions<'_>) -> Result<AppConfig> {
    let working_dir = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;
    let global_dir = get_global_config_dir();
    let sources = ConfigSources {
        working_dir: &working_dir,
        global_dir: global_dir.as_deref(),
        env: |key: &str| std::env::var(key).ok(),
    };
    let config = resolve_config(options, sources)?;

    init_logging(&config);
    debug!(
        strict = config.settings.strict,
        prompts = config.settings.prompts,
        files = ?config.config_files,
        "Configuration resolved"
    );

    Ok(config)
}
