//! Sequential screenshot file naming.
//!
//! Output files are named `screenshot-<n>.png` (or `screenshot-<n>-<label>.png`
//! with a label). The next number is derived on every invocation by scanning
//! the output directory rather than persisting a counter, so two concurrent
//! invocations can race and pick the same number; acceptable for a
//! single-operator dev tool.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Filename prefix every numbered screenshot starts with.
pub const SCREENSHOT_PREFIX: &str = "screenshot-";

/// Extracts the sequence number from a filename of the form
/// `screenshot-<digits>...`. Returns `None` when the prefix or the digits
/// are absent.
pub fn parse_sequence(name: &str) -> Option<u32> {
    let rest = name.strip_prefix(SCREENSHOT_PREFIX)?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Computes the next sequence number from an iterator of existing filenames.
///
/// A parsed value of zero never counts as a candidate, so a directory holding
/// only `screenshot-0-x.png` still yields 1 and numbering always starts at 1.
pub fn next_sequence<I, S>(names: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| parse_sequence(name.as_ref()))
        .filter(|&n| n > 0)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Composes the output filename for a sequence number and optional label.
pub fn screenshot_filename(n: u32, label: &str) -> String {
    if label.is_empty() {
        format!("screenshot-{n}.png")
    } else {
        format!("screenshot-{n}-{label}.png")
    }
}

/// Returns the path the next screenshot should be written to.
///
/// Creates `dir` if it does not exist yet; a freshly created directory is
/// treated as having no prior screenshots.
pub fn next_screenshot_path(dir: &Path, label: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    let n = next_sequence(&names);
    Ok(dir.join(screenshot_filename(n, label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_sequence_reads_leading_digits() {
        assert_eq!(parse_sequence("screenshot-12.png"), Some(12));
        assert_eq!(parse_sequence("screenshot-3-foo.png"), Some(3));
        assert_eq!(parse_sequence("screenshot-0-x.png"), Some(0));
    }

    #[test]
    fn parse_sequence_rejects_other_names() {
        assert_eq!(parse_sequence("notes.txt"), None);
        assert_eq!(parse_sequence("screenshot-.png"), None);
        assert_eq!(parse_sequence("screenshot-abc.png"), None);
        assert_eq!(parse_sequence("Screenshot-4.png"), None);
    }

    #[test]
    fn next_sequence_starts_at_one_when_empty() {
        assert_eq!(next_sequence(Vec::<String>::new()), 1);
    }

    #[test]
    fn next_sequence_is_max_plus_one_regardless_of_labels() {
        let names = ["screenshot-3-foo.png", "screenshot-7.png"];
        assert_eq!(next_sequence(names), 8);
    }

    #[test]
    fn next_sequence_ignores_non_matching_names() {
        let names = ["index.html", "screenshot-2.png", "shot-9.png"];
        assert_eq!(next_sequence(names), 3);
    }

    #[test]
    fn zero_numbered_file_is_not_a_candidate() {
        assert_eq!(next_sequence(["screenshot-0-x.png"]), 1);
    }

    #[test]
    fn next_sequence_saturates_at_u32_max() {
        assert_eq!(next_sequence(["screenshot-4294967295.png"]), u32::MAX);
    }

    #[test]
    fn filename_with_and_without_label() {
        assert_eq!(screenshot_filename(1, ""), "screenshot-1.png");
        assert_eq!(screenshot_filename(4, "hero"), "screenshot-4-hero.png");
    }

    #[test]
    fn next_path_in_missing_directory_is_number_one() {
        let dir = TempDir::new().expect("tempdir");
        let out = dir.path().join("shots");
        let path = next_screenshot_path(&out, "").expect("next path");
        assert_eq!(path, out.join("screenshot-1.png"));
        assert!(out.is_dir(), "output directory should be created");
    }

    #[test]
    fn next_path_with_label_in_empty_directory() {
        let dir = TempDir::new().expect("tempdir");
        let path = next_screenshot_path(dir.path(), "hero").expect("next path");
        assert_eq!(path, dir.path().join("screenshot-1-hero.png"));
    }

    #[test]
    fn next_path_scans_existing_files() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::write(dir.path().join("screenshot-3-foo.png"), b"x").unwrap();
        std::fs::write(dir.path().join("screenshot-7.png"), b"x").unwrap();
        std::fs::write(dir.path().join("README.md"), b"x").unwrap();

        let path = next_screenshot_path(dir.path(), "nav").expect("next path");
        assert_eq!(path, dir.path().join("screenshot-8-nav.png"));
    }
}
