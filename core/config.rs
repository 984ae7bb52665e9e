use crate::error::{AppError, Result};
use log;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILENAME: &str = "print.yaml";
pub const DEFAULT_TITLE: &str = "Project";

/// The configuration document. Every field is optional; unknown fields are
/// ignored so older or hand-annotated files keep loading.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub output_path: String,
    #[serde(default)]
    pub included_paths: Vec<String>,
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

impl Config {
    /// Walk root: the CLI value with `~` expanded, otherwise the working
    /// directory (`.`), so listed paths stay relative.
    pub fn determine_project_root(cli_project_root: Option<&PathBuf>) -> PathBuf {
        match cli_project_root {
            Some(path) => {
                let path_str = path.to_string_lossy();
                PathBuf::from(shellexpand::tilde(&path_str).as_ref())
            }
            None => PathBuf::from("."),
        }
    }

    /// Loads YAML, or TOML when the file has a `.toml` extension. An empty
    /// file yields the default (empty) configuration.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        log::info!("Loading configuration from: {}", config_path.display());
        let content = fs::read_to_string(config_path).map_err(|e| AppError::ConfigRead {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        let is_toml = config_path.extension().is_some_and(|ext| ext == "toml");
        Self::parse(&content, is_toml, config_path)
    }

    fn parse(content: &str, is_toml: bool, config_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            log::debug!("Configuration file is empty, using defaults.");
            return Ok(Self::default());
        }
        if is_toml {
            toml::from_str::<Config>(content).map_err(|e| AppError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            })
        } else {
            serde_yml::from_str::<Config>(content).map_err(|e| AppError::YamlParse {
                path: config_path.to_path_buf(),
                source: e,
            })
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_path.trim().is_empty() {
            return Err(AppError::Config(
                "`output_path` is not set; nowhere to write the document.".to_string(),
            ));
        }
        Ok(())
    }

    /// Destination file with a leading `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output_path).as_ref())
    }

    pub fn title(&self) -> &str {
        self.project_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn loads_yaml_fields() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(
            &dir,
            "print.yaml",
            "output_path: out.md\nincluded_paths:\n  - src\n  - \"*.go\"\nexcluded_paths:\n  - src/gen\n",
        );
        let config = Config::load_from_path(&path).expect("load");
        assert_eq!(config.output_path, "out.md");
        assert_eq!(config.included_paths, vec!["src", "*.go"]);
        assert_eq!(config.excluded_paths, vec!["src/gen"]);
        assert_eq!(config.title(), DEFAULT_TITLE);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "print.yaml", "output_path: out.md\n");
        let config = Config::load_from_path(&path).expect("load");
        assert!(config.included_paths.is_empty());
        assert!(config.excluded_paths.is_empty());
        assert!(config.project_name.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "print.yaml", "output_path: out.md\nauthor: someone\n");
        assert!(Config::load_from_path(&path).is_ok());
    }

    #[test]
    fn empty_file_is_default_config() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "print.yaml", "\n");
        let config = Config::load_from_path(&path).expect("load");
        assert_eq!(config, Config::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_extension_is_parsed_as_toml() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(
            &dir,
            "print.toml",
            "output_path = \"out.md\"\nincluded_paths = [\"src\"]\nproject_name = \"Demo\"\n",
        );
        let config = Config::load_from_path(&path).expect("load");
        assert_eq!(config.included_paths, vec!["src"]);
        assert_eq!(config.title(), "Demo");
    }

    #[test]
    fn missing_file_is_a_config_read_error() {
        let dir = TempDir::new().expect("temp dir");
        let err = Config::load_from_path(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(&dir, "print.yaml", "included_paths: [unterminated\n");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, AppError::YamlParse { .. }));
    }

    #[test]
    fn validate_requires_output_path() {
        let config = Config {
            output_path: "   ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config {
            output_path: "out.md".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn project_root_defaults_to_working_directory() {
        assert_eq!(Config::determine_project_root(None), PathBuf::from("."));
        let given = PathBuf::from("some/dir");
        assert_eq!(Config::determine_project_root(Some(&given)), given);
    }
}
