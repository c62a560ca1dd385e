//! Recursive file discovery
//!
//! Walks a directory tree and returns every regular file whose base name
//! matches an optional regex. The walker deliberately sees everything:
//! hidden files are kept and ignore files are not consulted, so the listing
//! reflects the raw tree. The same pass counts all directory entries for the
//! summary line.

use ignore::WalkBuilder;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Result of one collection pass over a directory tree
#[derive(Debug, Default)]
pub struct CollectedFiles {
    /// Matching regular files, sorted lexicographically by full path
    pub files: Vec<PathBuf>,
    /// Every entry beneath the root, directories included
    pub total_entries: usize,
}

/// Recursively collect all files under `root` whose base name matches
/// `pattern` (unanchored search); all regular files when `pattern` is absent.
pub fn collect(root: &Path, pattern: Option<&Regex>) -> CollectedFiles {
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    let mut total_entries = 0;

    for entry in walker {
        match entry {
            Ok(entry) => {
                // The walker yields the root itself first.
                if entry.depth() == 0 {
                    continue;
                }
                total_entries += 1;
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    let name = entry.file_name().to_string_lossy();
                    if pattern.is_none_or(|re| re.is_match(&name)) {
                        files.push(entry.into_path());
                    }
                }
            }
            Err(e) => {
                tracing::warn!("walk error: {}", e);
            }
        }
    }

    files.sort();

    CollectedFiles {
        files,
        total_entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("intro.md"), "# Intro").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "notes").unwrap();
        fs::create_dir(temp_dir.path().join("guides")).unwrap();
        fs::write(temp_dir.path().join("guides/setup.md"), "# Setup").unwrap();
        fs::write(temp_dir.path().join("guides/api.mdx"), "# API").unwrap();
        temp_dir
    }

    #[test]
    fn test_collects_all_files_without_pattern() {
        let temp_dir = fixture_tree();
        let collected = collect(temp_dir.path(), None);

        assert_eq!(collected.files.len(), 4);
        // 4 files + 1 directory
        assert_eq!(collected.total_entries, 5);
    }

    #[test]
    fn test_pattern_filters_by_base_name() {
        let temp_dir = fixture_tree();
        let pattern = Regex::new(r"\.md$").unwrap();
        let collected = collect(temp_dir.path(), Some(&pattern));

        assert_eq!(collected.files.len(), 2);
        assert!(collected.files.iter().all(|f| {
            f.file_name().unwrap().to_string_lossy().ends_with(".md")
        }));
    }

    #[test]
    fn test_pattern_search_is_unanchored() {
        let temp_dir = fixture_tree();
        let pattern = Regex::new("setup").unwrap();
        let collected = collect(temp_dir.path(), Some(&pattern));

        assert_eq!(collected.files.len(), 1);
        assert!(collected.files[0].ends_with("guides/setup.md"));
    }

    #[test]
    fn test_unrelated_file_does_not_change_existing_matches() {
        let temp_dir = fixture_tree();
        let pattern = Regex::new(r"\.md$").unwrap();
        let before = collect(temp_dir.path(), Some(&pattern));

        fs::write(temp_dir.path().join("guides/extra.rst"), "unrelated").unwrap();
        let after = collect(temp_dir.path(), Some(&pattern));

        assert_eq!(before.files, after.files);
        assert_eq!(after.total_entries, before.total_entries + 1);
    }

    #[test]
    fn test_collection_is_idempotent() {
        let temp_dir = fixture_tree();
        let pattern = Regex::new(r"\.mdx?$").unwrap();

        let first = collect(temp_dir.path(), Some(&pattern));
        let second = collect(temp_dir.path(), Some(&pattern));

        assert_eq!(first.files, second.files);
        assert_eq!(first.total_entries, second.total_entries);
    }

    #[test]
    fn test_hidden_files_are_included() {
        let temp_dir = fixture_tree();
        fs::write(temp_dir.path().join(".hidden.md"), "# Hidden").unwrap();

        let pattern = Regex::new(r"\.md$").unwrap();
        let collected = collect(temp_dir.path(), Some(&pattern));

        assert!(collected
            .files
            .iter()
            .any(|f| f.file_name().unwrap() == ".hidden.md"));
    }

    #[test]
    fn test_result_is_sorted_by_full_path() {
        let temp_dir = fixture_tree();
        let collected = collect(temp_dir.path(), None);

        let mut sorted = collected.files.clone();
        sorted.sort();
        assert_eq!(collected.files, sorted);
    }
}
