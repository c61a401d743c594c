//! Path resolution for pets configuration and data files.
//!
//! All pets data is stored in `~/.pets/`:
//! - `config.yaml` - Main configuration file
//! - `shelter.db` - SQLite database holding the `pets` table

use std::path::{Path, PathBuf};

use crate::error::PetsError;

/// Paths to pets configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pets/`
    pub root: PathBuf,
    /// Config file: `~/.pets/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PetsError> {
        let home = std::env::var("HOME")
            .map_err(|_| PetsError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".pets")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Path of a database file with the given name inside the root.
    #[must_use]
    pub fn database(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

}

/// Create `dir` and its parents if missing.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), PetsError> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|e| {
            PetsError::Config(format!("Failed to create directory {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pets"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-pets");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.database("shelter.db"), root.join("shelter.db"));
        assert_eq!(paths.database("other.db"), root.join("other.db"));
    }

    #[test]
    fn test_ensure_dir() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested").join(".pets");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }
}
