//! Run configuration loading and parsing

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Datasets reported when no files or config are given
const DEFAULT_DATASETS: &[(&str, &str)] = &[
    ("Vineyard Wind", "Vineyard_Wind_GWC.lib"),
    ("Sofia", "sofia_gwc.lib"),
];

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub datasets: Vec<DatasetConfig>,
}

/// One GWC file to report, with the label printed above it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub name: String,
    pub path: PathBuf,
}

impl DatasetConfig {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Label a bare file path by its stem
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();
        Self { name, path }
    }
}

impl AppConfig {
    /// The built-in Vineyard Wind and Sofia datasets
    pub fn default_datasets() -> Self {
        Self {
            datasets: DEFAULT_DATASETS
                .iter()
                .map(|(name, path)| DatasetConfig::new(*name, *path))
                .collect(),
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    if config.datasets.is_empty() {
        bail!("Config file {:?} lists no datasets", path);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [[datasets]]
            name = "Vineyard Wind"
            path = "data/Vineyard_Wind_GWC.lib"

            [[datasets]]
            name = "Sofia"
            path = "data/sofia_gwc.lib"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.datasets.len(), 2);
        assert_eq!(config.datasets[1].name, "Sofia");
        assert_eq!(config.datasets[1].path, PathBuf::from("data/sofia_gwc.lib"));
    }

    #[test]
    fn test_default_datasets() {
        let config = AppConfig::default_datasets();
        assert_eq!(
            config.datasets,
            vec![
                DatasetConfig::new("Vineyard Wind", "Vineyard_Wind_GWC.lib"),
                DatasetConfig::new("Sofia", "sofia_gwc.lib"),
            ]
        );
    }

    #[test]
    fn test_dataset_from_path_uses_stem() {
        let dataset = DatasetConfig::from_path(PathBuf::from("/data/sofia_gwc.lib"));
        assert_eq!(dataset.name, "sofia_gwc");
    }

    #[test]
    fn test_load_config_rejects_empty_dataset_list() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"datasets = []\n").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("no datasets"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
