//! Response extraction and file helpers.

use anyhow::{Context, Result};
use std::path::Path;

/// Extract the body of the first fenced code block, dropping the language
/// tag line. Returns None when the text has no complete fence.
fn extract_fenced(text: &str) -> Option<String> {
    let start = text.find("```")?;
    let after = &text[start + 3..];
    let body_start = after.find('\n')? + 1;
    let body = &after[body_start..];
    let end = body.rfind("```")?;
    Some(body[..end].trim().to_string())
}

/// Extract source code from an agent response.
///
/// Agents are instructed to output raw source, but models still wrap code in
/// markdown fences often enough that we strip them here.
pub fn extract_code(text: &str) -> String {
    extract_fenced(text).unwrap_or_else(|| text.trim().to_string())
}

/// Extract a JSON object from an agent response: fenced block first, then
/// the outermost `{...}` span, then the raw text.
pub fn extract_json(text: &str) -> String {
    let candidate = extract_fenced(text).unwrap_or_else(|| text.to_string());
    match (candidate.find('{'), candidate.rfind('}')) {
        (Some(start), Some(end)) if end > start => candidate[start..=end].to_string(),
        _ => candidate.trim().to_string(),
    }
}

/// Write generated source to disk, creating parent directories and ensuring
/// a trailing newline.
pub fn save_source(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let content = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    };

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))
}
