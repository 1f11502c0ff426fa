//! Filesystem access used by the config store

use std::fs;
use std::io;
use std::path::Path;

/// The three filesystem calls the store needs
pub trait FileSystem {
    /// Whether `path` exists
    fn exists(&self, path: &Path) -> bool;

    /// Read the whole file as UTF-8
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Replace the file contents, creating it if needed
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
