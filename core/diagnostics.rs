//! Recoverable warnings collected during a run.
//!
//! Walk and render take a `&mut Diagnostics` rather than logging into a
//! process-wide sink only, so callers (and tests) can inspect what was skipped.
//! Every pushed diagnostic is also forwarded to `log::warn!`.

use log;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A directory entry could not be visited during the walk.
    WalkEntry {
        path: Option<PathBuf>,
        message: String,
    },
    /// A matched file could not be read while rendering its content.
    UnreadableFile { path: String, message: String },
    /// A pattern could not be compiled as a glob; it only matches by path.
    InvalidPattern { pattern: String, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::WalkEntry {
                path: Some(path),
                message,
            } => write!(f, "Skipping \"{}\": {}", path.display(), message),
            Diagnostic::WalkEntry {
                path: None,
                message,
            } => write!(f, "Skipping unknown entry: {}", message),
            Diagnostic::UnreadableFile { path, message } => {
                write!(f, "Skipping file {} due to read error: {}", path, message)
            }
            Diagnostic::InvalidPattern { pattern, message } => {
                write!(f, "Invalid glob pattern \"{}\": {}", pattern, message)
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
