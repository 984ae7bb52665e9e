use log;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File,
    Directory(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    // Converts a file node in place when a later path descends through it.
    fn make_directory(&mut self) -> &mut BTreeMap<String, TreeNode> {
        match self {
            TreeNode::Directory(children) => children,
            TreeNode::File => {
                *self = TreeNode::Directory(BTreeMap::new());
                self.make_directory()
            }
        }
    }
}

/// Nested view of a flat list of slash-separated relative paths.
///
/// Keys are kept in a `BTreeMap`, so each level is always in byte-wise
/// lexicographic order with files and directories interleaved.
///
/// Input is not reconciled: if the same name is inserted once as a file and
/// once as a directory, the later insertion wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    root: BTreeMap<String, TreeNode>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<S: AsRef<str>>(paths: &[S]) -> Self {
        log::debug!("Building tree structure from {} paths...", paths.len());
        let mut tree = Self::new();
        for path in paths {
            tree.insert(path.as_ref());
        }
        tree
    }

    pub fn insert(&mut self, path: &str) {
        let mut current = &mut self.root;
        let mut parts = path.split('/').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                current.insert(part.to_string(), TreeNode::File);
                break;
            }
            current = current
                .entry(part.to_string())
                .or_insert_with(|| TreeNode::Directory(BTreeMap::new()))
                .make_directory();
        }
    }

    pub fn entries(&self) -> &BTreeMap<String, TreeNode> {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Markdown list lines, two spaces of indent per level starting at
    /// `indent_level`. Directory names end in `/`.
    pub fn render(&self, indent_level: usize) -> Vec<String> {
        let mut lines = Vec::new();
        render_level(&self.root, indent_level, &mut lines);
        lines
    }
}

fn render_level(
    nodes: &BTreeMap<String, TreeNode>,
    indent_level: usize,
    lines: &mut Vec<String>,
) {
    let indent = "  ".repeat(indent_level);
    for (name, node) in nodes {
        match node {
            TreeNode::File => lines.push(format!("{}- {}", indent, name)),
            TreeNode::Directory(children) => {
                lines.push(format!("{}- {}/", indent, name));
                render_level(children, indent_level + 1, lines);
            }
        }
    }
}
