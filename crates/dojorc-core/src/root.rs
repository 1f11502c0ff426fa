//! Package root discovery
//!
//! The config file lives next to the nearest `package.json`. Resolution is a
//! trait so callers can pin the root (or the lack of one) explicitly.

use std::path::{Path, PathBuf};

/// Default marker file that identifies a package directory
pub const DEFAULT_MARKER: &str = "package.json";

/// Resolves the directory that anchors the config file
pub trait RootResolver {
    /// Absolute path of the nearest package root, or `None` outside any package
    fn package_root(&self) -> Option<PathBuf>;
}

/// Walks up from a start directory looking for a marker file
#[derive(Debug, Clone)]
pub struct PkgDirResolver {
    /// Start directory (current working directory when unset)
    start: Option<PathBuf>,
    /// File whose presence marks a package root
    marker: String,
}

impl PkgDirResolver {
    /// Resolve from the current working directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: None,
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Resolve from an explicit directory
    #[must_use]
    pub fn from_dir(start: impl Into<PathBuf>) -> Self {
        Self {
            start: Some(start.into()),
            ..Self::new()
        }
    }

    /// Use a different marker file
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    fn start_dir(&self) -> Option<PathBuf> {
        let cwd = || std::env::current_dir().ok();
        match &self.start {
            Some(dir) if dir.is_absolute() => Some(dir.clone()),
            Some(dir) => cwd().map(|c| c.join(dir)),
            None => cwd(),
        }
    }
}

impl Default for PkgDirResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RootResolver for PkgDirResolver {
    fn package_root(&self) -> Option<PathBuf> {
        let start = self.start_dir()?;
        find_up(&start, &self.marker)
    }
}

/// A resolver that always answers the same thing
#[derive(Debug, Clone, Default)]
pub struct FixedRoot(pub Option<PathBuf>);

impl FixedRoot {
    /// Always resolve to `root`
    #[must_use]
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self(Some(root.into()))
    }

    /// Never resolve a root
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl RootResolver for FixedRoot {
    fn package_root(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Find the closest directory at or above `start` containing `marker`
#[must_use]
pub fn find_up(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_up_in_start_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        assert_eq!(
            find_up(dir.path(), DEFAULT_MARKER),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_find_up_from_nested_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let nested = dir.path().join("src/widgets/button");
        fs::create_dir_all(&nested).unwrap();

        let root = PkgDirResolver::from_dir(&nested).package_root();
        assert_eq!(root, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_nearest_package_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        let inner = dir.path().join("packages/app");
        fs::create_dir_all(inner.join("src")).unwrap();
        fs::write(inner.join("package.json"), "{}").unwrap();

        let root = PkgDirResolver::from_dir(inner.join("src")).package_root();
        assert_eq!(root, Some(inner));
    }

    #[test]
    fn test_marker_directory_is_not_a_match() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("package.json")).unwrap();

        assert!(find_up(dir.path(), DEFAULT_MARKER)
            .filter(|p| p.starts_with(dir.path()))
            .is_none());
    }

    #[test]
    fn test_custom_marker() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();

        let root = PkgDirResolver::from_dir(dir.path())
            .with_marker("Cargo.toml")
            .package_root();
        assert_eq!(root, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_fixed_root() {
        assert_eq!(
            FixedRoot::at("/work/app").package_root(),
            Some(PathBuf::from("/work/app"))
        );
        assert_eq!(FixedRoot::none().package_root(), None);
    }
}
