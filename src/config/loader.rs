use super::{ConfigFile, PrimerConfig, PROJECT_CONFIG_FILE};
use crate::error::{ErrorCode, PrimerError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds a [`PrimerConfig`] from layered sources.
///
/// Later loads win: global file, then project or explicit file, then
/// environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: PrimerConfig,
    sources: Vec<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `config.toml` from the global config directory, if present
    pub fn load_global(&mut self, dir: &Path) -> Result<()> {
        let path = dir.join("config.toml");
        if path.is_file() {
            self.apply_path(&path)?;
        }
        Ok(())
    }

    /// Load `primer.toml` from `dir`, if present
    pub fn load_project(&mut self, dir: &Path) -> Result<()> {
        let path = dir.join(PROJECT_CONFIG_FILE);
        if path.is_file() {
            self.apply_path(&path)?;
        }
        Ok(())
    }

    /// Load an explicitly requested file, which must exist
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(PrimerError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                "configuration file not found",
                Some(path.to_path_buf()),
            ));
        }
        self.apply_path(path)
    }

    /// Apply `PRIMER_*` overrides through `lookup`
    pub fn merge_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        self.config.merge_env(lookup)
    }

    /// Files that contributed to the configuration, in load order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn into_config(self) -> PrimerConfig {
        self.config
    }

    fn apply_path(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            PrimerError::config_with_code(
                ErrorCode::CONFIG_READ_ERROR,
                "failed to read configuration file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            PrimerError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                format!("invalid configuration: {}", e.message()),
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        debug!("Loaded configuration from {}", path.display());
        self.config.apply_file(file);
        self.sources.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_project_file_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let mut loader = ConfigLoader::new();
        loader.load_project(dir.path()).unwrap();
        assert!(loader.sources().is_empty());
        assert_eq!(loader.into_config(), PrimerConfig::default());
    }

    #[test]
    fn test_project_file_is_applied() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "strict = true\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_project(dir.path()).unwrap();
        assert_eq!(loader.sources().len(), 1);

        let config = loader.into_config();
        assert!(config.strict);
        assert!(config.prompts);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let mut loader = ConfigLoader::new();
        let err = loader.load_file(&dir.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_error_carries_code_and_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "strict = \"maybe\"\n").unwrap();

        let mut loader = ConfigLoader::new();
        let err = loader.load_file(&path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
        assert!(err.user_message().contains("bad.toml"));
    }

    #[test]
    fn test_global_file_is_optional() {
        let dir = TempDir::new().unwrap();
        let mut loader = ConfigLoader::new();
        loader.load_global(dir.path()).unwrap();
        assert!(loader.sources().is_empty());

        fs::write(dir.path().join("config.toml"), "prompts = false\n").unwrap();
        loader.load_global(dir.path()).unwrap();
        assert_eq!(loader.sources(), [dir.path().join("config.toml")]);
        assert!(!loader.into_config().prompts);
    }

    #[test]
    fn test_env_overrides_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("primer.toml");
        fs::write(&path, "strict = false\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&path).unwrap();
        loader
            .merge_env(|key| (key == "PRIMER_STRICT").then(|| "on".to_string()))
            .unwrap();
        assert!(loader.into_config().strict);
    }

    #[test]
    fn test_later_files_win() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.toml");
        let second = dir.path().join("second.toml");
        fs::write(&first, "strict = true\nprompts = false\n").unwrap();
        fs::write(&second, "strict = false\n").unwrap();

        let mut loader = ConfigLoader::new();
        loader.load_file(&first).unwrap();
        loader.load_file(&second).unwrap();

        let config = loader.into_config();
        assert!(!config.strict);
        assert!(!config.prompts);
    }
}
