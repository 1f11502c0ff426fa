//! User-facing warnings

/// Channel for warnings the user should see
pub trait Diagnostics {
    /// Report a single-line warning
    fn warn(&self, message: &str);
}

/// Prints warnings to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn warn(&self, message: &str) {
        eprintln!("Warning: {message}");
    }
}
