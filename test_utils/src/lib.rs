pub mod constants;

use std::fs::{self, read_dir};
use std::path::{Path, PathBuf};

const EXPECTED_PREFIX: &str = "EXPECTED:";
const COMMENT_PREFIX: &str = "COMMENT:";

/// Lists the fixture files in a directory, sorted by path for a stable test order.
pub fn list_test_files(directory: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = read_dir(directory)
        .expect("Failed to read test files directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.is_file())
        .collect();

    files.sort();

    files
}

/// Returns the symbols listed on `EXPECTED:` lines of a fixture file.
pub fn get_expected_symbols(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(EXPECTED_PREFIX)
                .map(|symbol| symbol.trim().to_string())
        })
        .collect()
}

/// Returns the fixture text with `EXPECTED:` and `COMMENT:` lines removed.
pub fn get_article_text(file_path: &Path) -> String {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_PREFIX) && !line.starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}
