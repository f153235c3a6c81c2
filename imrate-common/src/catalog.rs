//! Image catalog loading
//!
//! Scans a directory for rateable images and produces the ordered list a
//! session walks through. The scan is read-only, non-recursive, and keeps
//! only files with an allowed image extension.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// File extensions accepted by the catalog scan (matched case-insensitively)
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Ordered, immutable list of image file names for one session
///
/// Entries are sorted lexicographically by file name and never change after
/// the scan; a session holds its own catalog, so a directory edited mid-run
/// only affects sessions started afterwards.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    dir: PathBuf,
    entries: Vec<String>,
}

impl ImageCatalog {
    /// Scan `dir` for image files.
    ///
    /// Keeps regular files whose extension is jpg/jpeg/png in any case,
    /// sorted lexicographically. Subdirectories are not entered. A missing
    /// directory is a configuration error, not a panic.
    pub fn scan(dir: &Path) -> Result<ImageCatalog> {
        if !dir.is_dir() {
            return Err(Error::NotFound(format!(
                "image directory {} does not exist",
                dir.display()
            )));
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if has_allowed_extension(name) {
                entries.push(name.to_string());
            }
        }
        entries.sort();

        debug!(
            "catalog scan of {} found {} images",
            dir.display(),
            entries.len()
        );

        Ok(ImageCatalog {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    /// Directory the catalog was built from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of images in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the scan found no rateable images
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File name at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// True when `name` is one of the scanned entries
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    /// Full path of a catalog entry.
    ///
    /// Returns None for names outside the catalog, so callers cannot be
    /// steered to arbitrary filesystem paths.
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        if self.contains(name) {
            Some(self.dir.join(name))
        } else {
            None
        }
    }

    /// Iterate the entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// Case-insensitive check against the allowed extension set
fn has_allowed_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        dir
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = dir_with(&["b.png", "A.JPG", "c.txt"]);
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        let entries: Vec<&str> = catalog.iter().collect();
        assert_eq!(entries, vec!["A.JPG", "b.png"]);
    }

    #[test]
    fn test_scan_accepts_all_allowed_extensions() {
        let dir = dir_with(&["a.jpg", "b.JPEG", "c.Png", "d.gif", "e.jpg.bak"]);
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        let entries: Vec<&str> = catalog.iter().collect();
        assert_eq!(entries, vec!["a.jpg", "b.JPEG", "c.Png"]);
    }

    #[test]
    fn test_scan_missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = ImageCatalog::scan(&missing).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_scan_empty_directory_yields_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let dir = dir_with(&["a.jpg"]);
        fs::create_dir(dir.path().join("nested.png")).unwrap();
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        let entries: Vec<&str> = catalog.iter().collect();
        assert_eq!(entries, vec!["a.jpg"]);
    }

    #[test]
    fn test_get_and_contains() {
        let dir = dir_with(&["a.jpg", "b.jpg"]);
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        assert_eq!(catalog.get(0), Some("a.jpg"));
        assert_eq!(catalog.get(2), None);
        assert!(catalog.contains("b.jpg"));
        assert!(!catalog.contains("z.jpg"));
    }

    #[test]
    fn test_path_of_rejects_unknown_names() {
        let dir = dir_with(&["a.jpg"]);
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        assert_eq!(catalog.path_of("a.jpg"), Some(dir.path().join("a.jpg")));
        assert_eq!(catalog.path_of("../etc/passwd"), None);
        assert_eq!(catalog.path_of("b.jpg"), None);
    }

    #[test]
    fn test_hidden_extension_only_names_excluded() {
        let dir = dir_with(&[".png", "ok.png"]);
        let catalog = ImageCatalog::scan(dir.path()).unwrap();
        let entries: Vec<&str> = catalog.iter().collect();
        assert_eq!(entries, vec!["ok.png"]);
    }
}
