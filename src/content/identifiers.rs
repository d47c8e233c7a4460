//! Bibliographic identifier extraction.
//!
//! A single markdown document lists identifiers to fetch from the remote
//! API, one per line. Lines that are not identifiers (headings, prose,
//! partial IDs) are ignored, not reported.

use std::fs;
use std::path::Path;

/// Collect every identifier line from a document. Missing file reads as an
/// empty list.
pub fn extract(path: &Path) -> Vec<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };

    raw.lines()
        .map(str::trim)
        .filter(|line| is_identifier(line))
        .map(str::to_string)
        .collect()
}

/// Exactly four digits, a literal dot, exactly five digits.
fn is_identifier(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'.'
        && bytes[..4].iter().all(|b| b.is_ascii_digit())
        && bytes[5..].iter().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn keeps_only_strict_identifier_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "intro\n2401.12345\nnotes\n99999.1\n2401.99999").unwrap();

        assert_eq!(extract(file.path()), vec!["2401.12345", "2401.99999"]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  2401.12345  \n\t2312.00001\n").unwrap();

        assert_eq!(extract(file.path()), vec!["2401.12345", "2312.00001"]);
    }

    #[test]
    fn rejects_near_misses() {
        assert!(is_identifier("2401.12345"));
        assert!(!is_identifier("2401.1234"));
        assert!(!is_identifier("2401.123456"));
        assert!(!is_identifier("240.12345"));
        assert!(!is_identifier("2401x12345"));
        assert!(!is_identifier("abcd.12345"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn missing_file_is_empty_not_an_error() {
        assert!(extract(Path::new("/nonexistent/papers.md")).is_empty());
    }
}
