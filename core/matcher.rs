use crate::config::Config;
use std::path::Path;

/// What the walker should do with one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Descend into a directory, or write a file to the output.
    Include,
    SkipFile,
    /// Prune the directory and everything beneath it.
    SkipSubtree,
}

/// True when any entry is a literal substring of `name`.
///
/// No glob expansion and no path-segment matching: `.git` also matches
/// `.github` and `.gitbackup`, and `dist` matches `distiller.py`.
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| name.contains(exclude.as_str()))
}

#[derive(Debug, Clone, Copy)]
pub struct ExclusionMatcher<'a> {
    config: &'a Config,
}

impl<'a> ExclusionMatcher<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Directories are tested on their full walked path against
    /// `ExcludeFolders`; everything else on its base name against `ExcludeFiles`.
    pub fn verdict(&self, path: &Path, is_dir: bool) -> Verdict {
        if is_dir {
            if is_excluded(&path.to_string_lossy(), &self.config.exclude_folders) {
                return Verdict::SkipSubtree;
            }
            return Verdict::Include;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        if is_excluded(&name, &self.config.exclude_files) {
            Verdict::SkipFile
        } else {
            Verdict::Include
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_containment() {
        let excludes = list(&["dist", ".git"]);
        assert!(is_excluded("distiller.py", &excludes));
        assert!(is_excluded("proj/.github", &excludes));
        assert!(!is_excluded("src/main.rs", &excludes));
    }

    #[test]
    fn test_empty_list_never_matches() {
        assert!(!is_excluded("anything", &[]));
    }

    #[test]
    fn test_glob_entries_are_literal() {
        let excludes = list(&["*.log"]);
        assert!(!is_excluded("debug.log", &excludes));
        assert!(is_excluded("weird*.log", &excludes));
    }

    #[test]
    fn test_directory_matches_on_full_path() {
        let config = Config::new(["vendor"], Vec::<String>::new());
        let matcher = ExclusionMatcher::new(&config);
        assert_eq!(
            matcher.verdict(Path::new("proj/vendor"), true),
            Verdict::SkipSubtree
        );
        assert_eq!(
            matcher.verdict(Path::new("vendor-proj/src"), true),
            Verdict::SkipSubtree
        );
        assert_eq!(matcher.verdict(Path::new("proj/src"), true), Verdict::Include);
    }

    #[test]
    fn test_file_matches_on_base_name_only() {
        let config = Config::new(["vendor"], ["go.sum"]);
        let matcher = ExclusionMatcher::new(&config);
        assert_eq!(
            matcher.verdict(Path::new("proj/go.sum"), false),
            Verdict::SkipFile
        );
        // folder entries never apply to files
        assert_eq!(
            matcher.verdict(Path::new("proj/vendor.go"), false),
            Verdict::Include
        );
        // file entries are not tested against parent directories
        let config = Config::new(Vec::<String>::new(), ["go.sum"]);
        let matcher = ExclusionMatcher::new(&config);
        assert_eq!(
            matcher.verdict(Path::new("go.sum.d/main.go"), false),
            Verdict::Include
        );
    }

    #[test]
    fn test_git_entry_over_matches_gitbackup() {
        let config = Config::new([".git"], Vec::<String>::new());
        let matcher = ExclusionMatcher::new(&config);
        assert_eq!(matcher.verdict(Path::new("proj/.gitbackup"), true), Verdict::SkipSubtree);
    }
}
