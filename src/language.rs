//! Map file names to editor language ids for syntax highlighting in the
//! file-editor window. Anything unrecognized is plain text.

/// Detect the editor language id for a file name. Special names win over
/// extensions (`Dockerfile`, `Makefile`, ignore files).
pub fn detect_language(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower == "dockerfile" {
        return "dockerfile";
    }
    if lower == "makefile" || lower == "gnumakefile" {
        return "makefile";
    }
    if lower.ends_with(".gitignore") || lower.ends_with(".dockerignore") {
        return "ignore";
    }

    let Some((_, extension)) = lower.rsplit_once('.') else {
        return "plaintext";
    };

    match extension {
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" | "sass" => "scss",
        "less" => "less",
        "json" | "jsonc" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" | "ini" | "conf" | "cfg" | "env" => "ini",
        "md" | "markdown" => "markdown",
        "py" => "python",
        "go" => "go",
        "rs" => "rust",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "lua" => "lua",
        "r" => "r",
        "pl" | "pm" => "perl",
        "sh" | "bash" | "zsh" | "fish" => "shell",
        "ps1" | "psm1" => "powershell",
        "bat" | "cmd" => "bat",
        "sql" => "sql",
        "graphql" | "gql" => "graphql",
        "txt" | "text" | "log" => "plaintext",
        _ => "plaintext",
    }
}
