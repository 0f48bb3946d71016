//! Result file writing and deduplication.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Write the merged result lists to `path`, primary results first,
/// truncating any existing content. The file may contain duplicates until
/// [`dedupe_file`] runs.
pub fn merge_and_write(path: &Path, primary: &[String], secondary: &[String]) -> io::Result<()> {
    let joined = primary
        .iter()
        .chain(secondary)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(path, joined)
}

/// Rewrite `path` with duplicate lines removed. Line order is not
/// preserved.
///
/// Returns `false` without writing anything if the file does not exist;
/// the caller reports that condition.
pub fn dedupe_file(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(path)?;
    let unique: HashSet<&str> = content.lines().collect();
    let joined = unique.into_iter().collect::<Vec<_>>().join("\n");
    fs::write(path, joined)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn lines_of(path: &Path) -> HashSet<String> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_merge_then_dedupe_yields_set_union() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let primary = vec!["1.1.1.1:80".to_string(), "2.2.2.2:80".to_string()];
        let secondary = vec!["2.2.2.2:80".to_string(), "3.3.3.3:443".to_string()];

        merge_and_write(&path, &primary, &secondary).unwrap();
        assert!(dedupe_file(&path).unwrap());

        let expected: HashSet<String> = ["1.1.1.1:80", "2.2.2.2:80", "3.3.3.3:443"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines_of(&path), expected);

        // No duplicate lines remain
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.lines().count(), 3);
    }

    #[test]
    fn test_disjoint_lists_survive_dedupe_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let primary = vec!["10.0.0.1:22".to_string()];
        let secondary = vec!["10.0.0.2:22".to_string()];

        merge_and_write(&path, &primary, &secondary).unwrap();
        dedupe_file(&path).unwrap();

        assert_eq!(lines_of(&path).len(), 2);
    }

    #[test]
    fn test_merge_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "stale line\n").unwrap();

        merge_and_write(&path, &["4.4.4.4:53".to_string()], &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "4.4.4.4:53");
    }

    #[test]
    fn test_dedupe_missing_file_is_a_reported_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        assert!(!dedupe_file(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_lists_write_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        merge_and_write(&path, &[], &[]).unwrap();
        assert!(dedupe_file(&path).unwrap());

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
