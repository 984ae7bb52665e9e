pub mod config;
pub mod diagnostics;
pub mod error;
pub mod language;
pub mod pattern;
pub mod render;
pub mod tree;
pub mod walk;

pub use config::{Config, DEFAULT_CONFIG_FILENAME, DEFAULT_TITLE};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{AppError, Result};
pub use language::language_for_path;
pub use pattern::{Filter, PatternSet, normalize};
pub use render::MarkdownRenderer;
pub use tree::{FileTree, TreeNode};
pub use walk::Walker;
