//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["survey-tally.toml", ".survey-tally.toml"];

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./survey-tally.toml` or `./.survey-tally.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/survey-tally/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigLoadError> {
        Self::load_from(
            config_path,
            Self::project_config_path().as_deref(),
            Self::global_config_path().as_deref(),
        )
    }

    /// Load configuration from explicitly located sources
    ///
    /// Missing project or global files are skipped. A missing explicit
    /// file is an error, since the user asked for it by name.
    pub fn load_from(
        config_path: Option<&Path>,
        project_path: Option<&Path>,
        global_path: Option<&Path>,
    ) -> Result<FileConfig, ConfigLoadError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global_path.filter(|p| p.exists()) {
            debug!("Loading global config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project_path.filter(|p| p.exists()) {
            debug!("Loading project config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigLoadError::Missing(path.to_path_buf()));
            }
            debug!("Loading config from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.extract().map_err(Box::new)?)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/survey-tally/config.toml if set,
    /// otherwise the platform config directory equivalent
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("survey-tally").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./survey-tally.toml or ./.survey-tally.toml");
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
    use std::fs;
    use tally_domain::ReportFormat;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.output.color);
        assert_eq!(config.report.bar_step, 5);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("survey-tally"));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("survey-tally.toml");
        let global = dir.path().join("config.toml");
        let config =
            ConfigLoader::load_from(None, Some(project.as_path()), Some(global.as_path()))
                .unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        let explicit = dir.path().join("explicit.toml");

        fs::write(
            &global,
            "[output]\ncolor = false\nformat = \"json\"\n\n[report]\nbar_step = 10\nlabel_width = 8\n",
        )
        .unwrap();
        fs::write(&project, "[report]\nbar_step = 20\n").unwrap();
        fs::write(&explicit, "[output]\nformat = \"table\"\n").unwrap();

        let config = ConfigLoader::load_from(
            Some(explicit.as_path()),
            Some(project.as_path()),
            Some(global.as_path()),
        )
        .unwrap();

        // Untouched by higher layers
        assert!(!config.output.color);
        assert_eq!(config.report.label_width, 8);
        // Overridden
        assert_eq!(config.report.bar_step, 20);
        assert_eq!(config.output.format, Some(ReportFormat::Table));
        // Never set anywhere
        assert_eq!(config.report.bar_mark, "#");
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load_from(Some(missing.as_path()), None, None).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Missing(path) if path == missing));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[report]\nbar_step = \"wide\"\n").unwrap();
        let err = ConfigLoader::load_from(Some(path.as_path()), None, None).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));
    }
}
