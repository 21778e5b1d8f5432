use crate::error::{AppError, Result};
use log;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "codex.yml";

/// Exclusion lists for a single project. Order is preserved exactly as read
/// from the file or the canned defaults; duplicates are allowed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "ExcludeFolders", default)]
    pub exclude_folders: Vec<String>,
    #[serde(rename = "ExcludeFiles", default)]
    pub exclude_files: Vec<String>,
}

impl Config {
    pub fn new<F, S>(folders: F, files: S) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            exclude_folders: folders.into_iter().map(Into::into).collect(),
            exclude_files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Location of the per-project config file inside `project_dir`.
    pub fn path_in(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILENAME)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yml::to_string(self)?)
    }

    pub fn from_yaml(content: &str, source_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            log::warn!(
                "Config file '{}' is empty, no exclusions will be applied.",
                source_path.display()
            );
            return Ok(Self::default());
        }
        serde_yml::from_str::<Config>(content).map_err(|e| AppError::ConfigParse {
            path: source_path.to_path_buf(),
            message: format!(
                "{}. Expected two lists named 'ExcludeFolders' and 'ExcludeFiles'.",
                e
            ),
        })
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from: {}", config_path.display());
        let content = fs::read_to_string(config_path).map_err(|e| AppError::ConfigRead {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_yaml(&content, config_path)?;
        log::trace!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Serializes and writes in one call, truncating any existing file.
    pub fn save_to_path(&self, config_path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(config_path, yaml).map_err(|e| AppError::ConfigWrite {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Wrote configuration to: {}", config_path.display());
        Ok(())
    }
}
