//! dojorc core - command-scoped settings in a project-local `.dojorc`
//!
//! A [`ConfigStore`] finds the nearest package root, reads the JSON file at
//! `<root>/.dojorc` and exposes `get`/`save` keyed by command name. `save`
//! shallow-merges into the existing entry and rewrites the whole file.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod diagnostics;
pub mod error;
pub mod fs;
pub mod merge;
pub mod root;
pub mod store;

pub use diagnostics::{Diagnostics, StderrDiagnostics};
pub use error::{ConfigError, ConfigResult};
pub use fs::{FileSystem, OsFileSystem};
pub use merge::merge_shallow;
pub use root::{find_up, FixedRoot, PkgDirResolver, RootResolver, DEFAULT_MARKER};
pub use store::{ConfigStore, SaveOutcome, DEFAULT_FILE_NAME};
