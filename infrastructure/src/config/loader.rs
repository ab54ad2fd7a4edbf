//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_CONFIG_FILES: [&str; 2] = ["evaluation.toml", ".evaluation.toml"];

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided, must exist)
    /// 2. Project root: `./evaluation.toml` or `./.evaluation.toml`
    /// 3. Global config: `<config dir>/evaluation-engine/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigLoadError> {
        let mut sources = Vec::new();

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            sources.push(global_path);
        }

        if let Some(project_path) = Self::project_config_path() {
            sources.push(project_path);
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigLoadError::NotFound(path.clone()));
            }
            sources.push(path.clone());
        }

        Self::load_from(&sources)
    }

    /// Merge the given files over the defaults, later files winning
    pub fn load_from(sources: &[impl AsRef<Path>]) -> Result<FileConfig, ConfigLoadError> {
        let figment = sources.iter().fold(
            Figment::new().merge(Serialized::defaults(FileConfig::default())),
            |figment, path| figment.merge(Toml::file(path.as_ref())),
        );

        figment.extract().map_err(|e| ConfigLoadError::from(Box::new(e)))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/evaluation-engine/config.toml` if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("evaluation-engine").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./evaluation.toml or ./.evaluation.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_domain::OutputFormat;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.output.format, None);
        assert!(config.output.color);
        assert!(!config.trace.log_answers);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("evaluation-engine"));
    }

    #[test]
    fn test_later_sources_win() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        std::fs::write(&global, "[output]\nformat = \"full\"\ncolor = false\n").unwrap();
        std::fs::write(&project, "[output]\nformat = \"json\"\n\n[trace]\nlog_answers = true\n")
            .unwrap();

        let config = ConfigLoader::load_from(&[global, project]).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.trace.log_answers);
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"fancy\"\n").unwrap();

        let error = ConfigLoader::load_from(&[path]).unwrap_err();
        assert!(matches!(error, ConfigLoadError::Invalid(_)));
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let error = ConfigLoader::load(Some(&missing)).unwrap_err();
        assert!(matches!(error, ConfigLoadError::NotFound(_)));
    }
}
