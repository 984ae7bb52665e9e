use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{AppError, Result};
use crate::language::language_for_path;
use crate::tree::FileTree;
use log;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the Markdown document: a title, the file structure, then the
/// content of each file in the order it was collected.
///
/// The structure section is built from the full path list, while the content
/// section skips (and records) files that can no longer be read. A file
/// removed between the walk and the render is therefore listed but has no
/// content block.
pub struct MarkdownRenderer<'a> {
    title: &'a str,
    root: PathBuf,
}

impl<'a> MarkdownRenderer<'a> {
    /// `root` is the directory the collected paths are relative to.
    pub fn new(title: &'a str, root: impl Into<PathBuf>) -> Self {
        Self {
            title,
            root: root.into(),
        }
    }

    pub fn render_to_file(
        &self,
        output_path: &Path,
        paths: &[String],
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        log::info!("Writing Markdown to: {}", output_path.display());
        let file = File::create(output_path).map_err(|e| AppError::OutputCreate {
            path: output_path.to_path_buf(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        self.write(&mut writer, paths, diagnostics)
            .and_then(|_| writer.flush())
            .map_err(|e| AppError::FileWrite {
                path: output_path.to_path_buf(),
                source: e,
            })?;
        log::info!("Markdown written for {} files.", paths.len());
        Ok(())
    }

    pub fn write<W: Write>(
        &self,
        writer: &mut W,
        paths: &[String],
        diagnostics: &mut Diagnostics,
    ) -> io::Result<()> {
        write!(writer, "# {}\n\n", self.title)?;
        self.write_structure(writer, paths)?;
        self.write_contents(writer, paths, diagnostics)
    }

    fn write_structure<W: Write>(&self, writer: &mut W, paths: &[String]) -> io::Result<()> {
        writer.write_all(b"## File Structure\n\n")?;
        let tree = FileTree::build(paths);
        for line in tree.render(0) {
            writeln!(writer, "{}", line)?;
        }
        if !tree.is_empty() {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn write_contents<W: Write>(
        &self,
        writer: &mut W,
        paths: &[String],
        diagnostics: &mut Diagnostics,
    ) -> io::Result<()> {
        writer.write_all(b"## File Content\n\n")?;
        for path in paths {
            let content = match fs::read(self.root.join(path)) {
                Ok(content) => content,
                Err(e) => {
                    diagnostics.push(Diagnostic::UnreadableFile {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            log::trace!("Embedding {} ({} bytes)", path, content.len());

            write!(writer, "### {}\n\n", path)?;
            writeln!(writer, "```{}", language_for_path(path))?;
            writer.write_all(&content)?;
            writer.write_all(b"\n```\n\n")?;
        }
        Ok(())
    }
}
