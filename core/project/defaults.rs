// Canned exclusion lists per detected project type.
use crate::config::Config;
use crate::project::ProjectType;

// Entries like "*.jar" are kept verbatim. The matcher only does substring
// containment, so they match file names that literally contain "*.jar".
pub fn default_config(project_type: ProjectType) -> Config {
    match project_type {
        ProjectType::NodeJs => Config::new(
            ["node_modules", "dist", "build"],
            ["package-lock.json", "yarn.lock"],
        ),
        ProjectType::Python => Config::new(
            ["__pycache__", ".venv"],
            ["requirements.txt", "Pipfile.lock"],
        ),
        ProjectType::Go => Config::new(["vendor"], ["go.sum"]),
        ProjectType::Java => Config::new(["target", ".gradle"], ["*.jar", "*.war"]),
        ProjectType::Default => Config::new([".git", "bin", "obj"], ["*.log", "*.tmp"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_defaults() {
        let config = default_config(ProjectType::Go);
        assert_eq!(config.exclude_folders, vec!["vendor"]);
        assert_eq!(config.exclude_files, vec!["go.sum"]);
    }

    #[test]
    fn test_nodejs_defaults_keep_order() {
        let config = default_config(ProjectType::NodeJs);
        assert_eq!(config.exclude_folders, vec!["node_modules", "dist", "build"]);
        assert_eq!(config.exclude_files, vec!["package-lock.json", "yarn.lock"]);
    }

    #[test]
    fn test_glob_looking_entries_are_stored_verbatim() {
        assert_eq!(
            default_config(ProjectType::Java).exclude_files,
            vec!["*.jar", "*.war"]
        );
        assert_eq!(
            default_config(ProjectType::Default).exclude_files,
            vec!["*.log", "*.tmp"]
        );
    }
}
