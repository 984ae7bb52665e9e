use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{AppError, Result};
use crate::pattern::{Filter, normalize};
use log;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Sequential directory walk that collects the relative paths of every
/// non-directory entry accepted by a [`Filter`].
///
/// Entries are visited in file-name order within each directory and
/// symlinks are not followed, so the result is stable across runs.
pub struct Walker<'a> {
    root: PathBuf,
    filter: &'a Filter,
    skip: Option<PathBuf>,
}

impl<'a> Walker<'a> {
    pub fn new(root: impl Into<PathBuf>, filter: &'a Filter) -> Self {
        Self {
            root: root.into(),
            filter,
            skip: None,
        }
    }

    /// Leaves one concrete file out of the result (typically the output
    /// document of a previous run). Does nothing if `path` does not exist.
    pub fn skip_path(mut self, path: &Path) -> Self {
        self.skip = fs::canonicalize(path).ok();
        self
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        let Some(skip) = &self.skip else {
            return false;
        };
        if skip.file_name() != Some(entry.file_name()) {
            return false;
        }
        fs::canonicalize(entry.path()).is_ok_and(|p| &p == skip)
    }

    fn relative_path(&self, entry: &DirEntry) -> String {
        let relative = pathdiff::diff_paths(entry.path(), &self.root)
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or_else(|| entry.path().to_path_buf());
        normalize(&relative.to_string_lossy())
    }

    /// Fails only if the root itself cannot be read. Errors on any other
    /// entry are recorded in `diagnostics` and that entry is skipped.
    pub fn walk(&self, diagnostics: &mut Diagnostics) -> Result<Vec<String>> {
        log::info!("Walking project directory: {}", self.root.display());
        let mut files = Vec::new();

        for entry_result in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(AppError::WalkStart {
                        path: self.root.clone(),
                        message: e
                            .io_error()
                            .map_or_else(|| e.to_string(), |io| io.to_string()),
                    });
                }
                Err(e) => {
                    diagnostics.push(Diagnostic::WalkEntry {
                        path: e.path().map(Path::to_path_buf),
                        message: e
                            .io_error()
                            .map_or_else(|| e.to_string(), |io| io.to_string()),
                    });
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            if self.is_skipped(&entry) {
                log::debug!("Skipping output document: {}", entry.path().display());
                continue;
            }

            let relative_path = self.relative_path(&entry);
            if self.filter.is_included(&relative_path) {
                log::trace!("Including: {}", relative_path);
                files.push(relative_path);
            }
        }

        log::info!("Directory walk complete. Matched {} files.", files.len());
        Ok(files)
    }
}
