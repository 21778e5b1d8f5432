use crate::config::Config;
use log;
use serde::Serialize;
use std::fmt;
use std::path::Path;

pub mod defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[serde(rename = "nodejs")]
    NodeJs,
    Python,
    Go,
    Java,
    Default,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::NodeJs => "nodejs",
            ProjectType::Python => "python",
            ProjectType::Go => "go",
            ProjectType::Java => "java",
            ProjectType::Default => "default",
        }
    }

    pub fn default_config(self) -> Config {
        defaults::default_config(self)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker files checked in priority order; the first one present wins.
pub const MARKER_FILES: &[(&str, ProjectType)] = &[
    ("package.json", ProjectType::NodeJs),
    ("requirements.txt", ProjectType::Python),
    ("go.mod", ProjectType::Go),
    ("pom.xml", ProjectType::Java),
];

/// Guesses the project type from the top-level entries of `project_dir`.
/// A missing or unreadable directory simply detects as `Default`.
pub fn detect_project_type(project_dir: &Path) -> ProjectType {
    log::debug!("Detecting project type in: {}", project_dir.display());
    for (marker, project_type) in MARKER_FILES {
        if project_dir.join(marker).exists() {
            log::trace!("Found marker '{}' -> {}", marker, project_type);
            return *project_type;
        }
    }
    log::trace!("No marker file found, using default project type");
    ProjectType::Default
}
