//! Expansion of `--input` arguments into files

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Expand every argument as a glob and return the matched files, sorted and
/// without duplicates.
///
/// Each argument must match at least one regular file; the arguments that
/// match nothing are reported together. Entries the walk cannot read are
/// logged and skipped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    let mut unmatched = Vec::new();

    for pattern in patterns {
        let entries = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let mut matched = false;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    matched = true;
                    files.insert(path);
                }
                Ok(path) => log::debug!("{pattern}: skipping {}", path.display()),
                Err(err) => log::warn!(
                    "{pattern}: cannot read {}: {}",
                    err.path().display(),
                    err.error()
                ),
            }
        }
        if !matched {
            unmatched.push(pattern.as_str());
        }
    }

    if !unmatched.is_empty() {
        return Err(CliError::FileNotFound(unmatched.join(", ")).into());
    }
    Ok(files.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_glob_matches_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let pattern = dir.path().join("*.txt").display().to_string();
        let exact = dir.path().join("a.txt").display().to_string();

        let files = resolve_patterns(&[pattern, exact]).unwrap();
        assert_eq!(names(&files), vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_directories_are_not_documents() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        fs::write(dir.path().join("word.txt"), "").unwrap();
        let pattern = dir.path().join("*.txt").display().to_string();
        assert_eq!(names(&resolve_patterns(&[pattern]).unwrap()), vec!["word.txt"]);
    }

    #[test]
    fn test_every_unmatched_argument_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        let found = dir.path().join("a.txt").display().to_string();
        let missing = dir.path().join("*.tex").display().to_string();
        let also_missing = dir.path().join("b.txt").display().to_string();

        let err = resolve_patterns(&[found, missing.clone(), also_missing.clone()]).unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::FileNotFound(list)) => {
                assert_eq!(list, &format!("{missing}, {also_missing}"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }
}
