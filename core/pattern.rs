//! Include/exclude path matching.
//!
//! A pattern matches a candidate path in one of three ways:
//!
//! 1. the path equals the pattern,
//! 2. the path lies inside the pattern read as a directory (`is_within`),
//! 3. the path's final segment matches the pattern as a shell glob
//!    (`matches_file_name`). Globs never cross a `/`.
//!
//! Paths and patterns are compared after `normalize`, so `./src/`, `src/.`
//! and `src` are the same pattern.

use crate::diagnostics::{Diagnostic, Diagnostics};
use globset::{GlobBuilder, GlobMatcher};
use log;
use std::path::MAIN_SEPARATOR;

/// Lexically cleans a path: `/` separators, no empty, `.` or trailing
/// segments, and `..` folded into its parent where one exists. An empty
/// input becomes `.`.
pub fn normalize(path: &str) -> String {
    let slashed = if MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(MAIN_SEPARATOR, "/")
    };
    let rooted = slashed.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in slashed.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

/// True when `path` is `dir` itself or a descendant of it.
///
/// Both arguments must already be normalized. An absolute path is never
/// inside a relative directory and vice versa.
pub fn is_within(path: &str, dir: &str) -> bool {
    if path.starts_with('/') != dir.starts_with('/') {
        return false;
    }
    let mut remaining = segments(path);
    for dir_segment in segments(dir) {
        if remaining.next() != Some(dir_segment) {
            return false;
        }
    }
    remaining.next() != Some("..")
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Glob test against the final segment of `path` only.
pub fn matches_file_name(path: &str, glob: &GlobMatcher) -> bool {
    glob.is_match(file_name(path))
}

/// Escapes `{` and `}` outside bracket classes so braces match literally
/// instead of acting as globset alternation.
fn escape_braces(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut in_class = false;
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                escaped.push(c);
                if let Some(&negate @ ('!' | '^')) = chars.peek() {
                    escaped.push(negate);
                    chars.next();
                }
                // A leading `]` is a member of the class, not its end.
                if chars.peek() == Some(&']') {
                    escaped.push(']');
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                escaped.push(c);
            }
            '{' | '}' if !in_class => {
                escaped.push('\\');
                escaped.push(c);
            }
            other => escaped.push(other),
        }
    }
    escaped
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    GlobBuilder::new(&escape_braces(pattern))
        .literal_separator(true)
        .backslash_escape(true)
        .build()
        .map(|glob| glob.compile_matcher())
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    normalized: String,
    glob: Option<GlobMatcher>,
}

impl CompiledPattern {
    fn matches(&self, path: &str) -> bool {
        path == self.normalized
            || is_within(path, &self.normalized)
            || self
                .glob
                .as_ref()
                .is_some_and(|glob| matches_file_name(path, glob))
    }
}

/// A compiled list of patterns. An empty set matches nothing.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Normalizes and compiles `patterns`. A pattern whose glob fails to
    /// compile is kept for the exact and directory rules; the failure is
    /// recorded as an `InvalidPattern` diagnostic.
    pub fn compile<S: AsRef<str>>(patterns: &[S], diagnostics: &mut Diagnostics) -> Self {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let normalized = normalize(raw.as_ref());
                let glob = match compile_glob(&normalized) {
                    Ok(glob) => Some(glob),
                    Err(e) => {
                        diagnostics.push(Diagnostic::InvalidPattern {
                            pattern: raw.as_ref().to_string(),
                            message: e.kind().to_string(),
                        });
                        None
                    }
                };
                log::trace!(
                    "Compiled pattern: {} (normalized as {})",
                    raw.as_ref(),
                    normalized
                );
                CompiledPattern { normalized, glob }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// `path` must be normalized.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }
}

/// Convenience form of `PatternSet::compile(..).matches(..)` that normalizes
/// `path` as well. Glob compile failures are treated as no match.
pub fn matches<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    let mut diagnostics = Diagnostics::new();
    PatternSet::compile(patterns, &mut diagnostics).matches(&normalize(path))
}

/// Include/exclude pair. Exclusion always wins.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    includes: PatternSet,
    excludes: PatternSet,
}

impl Filter {
    pub fn new<S: AsRef<str>>(
        includes: &[S],
        excludes: &[S],
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let includes = PatternSet::compile(includes, diagnostics);
        let excludes = PatternSet::compile(excludes, diagnostics);
        if includes.is_empty() {
            log::warn!("No include patterns configured; no files will be selected.");
        }
        log::debug!(
            "Filter built with {} include and {} exclude patterns",
            includes.len(),
            excludes.len()
        );
        Self { includes, excludes }
    }

    /// `path` must be normalized.
    pub fn is_included(&self, path: &str) -> bool {
        if self.excludes.matches(path) {
            log::trace!("Path excluded: {}", path);
            return false;
        }
        let included = self.includes.matches(path);
        if !included {
            log::trace!("Path not included: {}", path);
        }
        included
    }
}
