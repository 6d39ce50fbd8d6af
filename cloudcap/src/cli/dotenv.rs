//! Credentials kept in a `.env` file next to where the tool runs.
//!
//! Values only become defaults of the matching flags, so a flag or a process
//! environment variable always wins.

use std::collections::HashMap;
use std::path::Path;

pub const DOTENV_FILE: &str = ".env";

/// `KEY=VALUE` pairs of the file. A missing file yields no pairs.
pub fn load(path: &Path) -> Result<HashMap<String, String>, dotenvy::Error> {
    match dotenvy::from_path_iter(path) {
        Ok(pairs) => pairs.collect(),
        Err(e) if e.not_found() => {
            tracing::debug!("no {} file", path.display());
            Ok(HashMap::new())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_quoted_and_plain_values() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        std::fs::write(&path, "netapp_user=\"admin\"\nnetapp_pass=s3cret\n").unwrap();

        // Act
        let values = load(&path).unwrap();

        // Assert
        assert_eq!(values.get("netapp_user").map(String::as_str), Some("admin"));
        assert_eq!(values.get("netapp_pass").map(String::as_str), Some("s3cret"));
    }

    #[test]
    fn load_missing_file_is_empty() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();

        // Act
        let values = load(&dir.path().join(DOTENV_FILE)).unwrap();

        // Assert
        assert!(values.is_empty());
    }

    #[test]
    fn load_malformed_file_fails() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        std::fs::write(&path, "netapp_user='unterminated\n").unwrap();

        // Act
        let result = load(&path);

        // Assert
        assert!(result.is_err());
    }
}
