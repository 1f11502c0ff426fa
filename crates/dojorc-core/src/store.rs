//! Command-scoped config store
//!
//! Each top-level key of `.dojorc` is a command name and its value is that
//! command's config. Every call re-reads the file; nothing is cached.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::diagnostics::{Diagnostics, StderrDiagnostics};
use crate::error::{ConfigError, ConfigResult};
use crate::fs::{FileSystem, OsFileSystem};
use crate::merge::merge_shallow;
use crate::root::RootResolver;

/// Default config file name
pub const DEFAULT_FILE_NAME: &str = ".dojorc";

/// What `save` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The merged document was written to this path
    Written(PathBuf),
    /// No package root was found, nothing was written
    NoPackageRoot,
}

impl SaveOutcome {
    /// Whether anything was persisted
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Reads and writes per-command config in the package's `.dojorc`
pub struct ConfigStore {
    resolver: Box<dyn RootResolver>,
    fs: Box<dyn FileSystem>,
    diagnostics: Box<dyn Diagnostics>,
    file_name: String,
}

impl ConfigStore {
    /// Create a store backed by the real filesystem and stderr warnings
    #[must_use]
    pub fn new(resolver: impl RootResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            fs: Box::new(OsFileSystem),
            diagnostics: Box::new(StderrDiagnostics),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Replace the filesystem
    #[must_use]
    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Replace the warning channel
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// Use a config file name other than `.dojorc`
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Config file name inside the package root
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Path of the config file, or `None` outside any package
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        let root = self.resolver.package_root()?;
        debug!(root = %root.display(), "resolved package root");
        Some(root.join(&self.file_name))
    }

    /// Get the config stored for `command_name`.
    ///
    /// Returns an empty object when there is no package root, no config
    /// file, or no entry for the command.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn get(&self, command_name: &str) -> ConfigResult<Value> {
        let document = self.get_all()?;
        Ok(document
            .get(command_name)
            .cloned()
            .unwrap_or_else(empty_object))
    }

    /// Get the whole document, keyed by command name
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn get_all(&self) -> ConfigResult<Map<String, Value>> {
        match self.config_path() {
            Some(path) => self.read_document(&path),
            None => Ok(Map::new()),
        }
    }

    /// Merge `new_config` into the entry for `command_name` and write the
    /// whole document back.
    ///
    /// Outside any package a warning is emitted and nothing is written.
    ///
    /// # Errors
    /// Returns an error if the existing file cannot be read or parsed, or
    /// the result cannot be written
    pub fn save(&self, new_config: Value, command_name: &str) -> ConfigResult<SaveOutcome> {
        let Some(path) = self.config_path() else {
            self.diagnostics.warn(&format!(
                "No package directory found, {} was not saved",
                self.file_name
            ));
            return Ok(SaveOutcome::NoPackageRoot);
        };

        let mut document = self.read_document(&path)?;
        match document.get_mut(command_name) {
            Some(existing) => merge_shallow(existing, new_config),
            None => {
                document.insert(command_name.to_string(), new_config);
            }
        }

        self.write_document(&path, document)?;
        Ok(SaveOutcome::Written(path))
    }

    // -------------------------------------------------------------------------
    // Private helpers
    // -------------------------------------------------------------------------

    fn read_document(&self, path: &Path) -> ConfigResult<Map<String, Value>> {
        if !self.fs.exists(path) {
            debug!(path = %path.display(), "config file not found");
            return Ok(Map::new());
        }

        let content = self
            .fs
            .read_text(path)
            .map_err(|e| ConfigError::io(path, &e))?;
        debug!(path = %path.display(), bytes = content.len(), "read config file");

        let json: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::parse(path, e.to_string()))?;

        match json {
            Value::Object(document) => Ok(document),
            _ => Err(ConfigError::parse(path, "Expected JSON object")),
        }
    }

    fn write_document(&self, path: &Path, document: Map<String, Value>) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(&Value::Object(document))?;

        self.fs
            .write_text(path, &content)
            .map_err(|e| ConfigError::io(path, &e))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote config file");
        Ok(())
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
