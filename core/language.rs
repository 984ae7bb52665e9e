use std::path::Path;

/// Maps a file extension (without the dot, case-sensitive) to the language
/// tag used on a Markdown code fence.
pub fn map_extension_to_language(extension: &str) -> Option<&'static str> {
    match extension {
        "go" => Some("go"),
        "js" | "jsx" => Some("javascript"),
        "ts" | "tsx" => Some("typescript"),
        "py" => Some("python"),
        "java" => Some("java"),
        "kt" => Some("kotlin"),
        "swift" => Some("swift"),
        "c" | "h" => Some("c"),
        "cpp" | "hpp" => Some("cpp"),
        "rs" => Some("rust"),
        "rb" => Some("ruby"),
        "html" => Some("html"),
        "css" => Some("css"),
        "sh" => Some("bash"),
        "sql" => Some("sql"),
        "json" => Some("json"),
        "yaml" | "yml" => Some("yaml"),
        "toml" => Some("toml"),
        "xml" => Some("xml"),
        "md" => Some("markdown"),
        _ => None,
    }
}

/// Fence tag for `path`; empty when the extension is missing or unknown.
pub fn language_for_path(path: impl AsRef<Path>) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(map_extension_to_language)
        .unwrap_or("")
}
