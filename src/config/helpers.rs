use std::path::{Path, PathBuf};

use crate::SigilError;

pub(super) fn expand_home(path: &Path) -> Result<PathBuf, SigilError> {
    let raw = path.to_string_lossy();

    if let Some(rest) = raw.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| SigilError::FileError {
            message: "Could not determine home directory".into(),
            path: raw.to_string(),
            hint: Some("Set HOME or use an absolute path".into()),
            code: Some(300),
        })?;
        return Ok(home.join(rest));
    }

    Ok(path.to_path_buf())
}

pub(super) fn find_config_line(key: &str, raw_content: &str) -> (usize, String) {
    let key_parts: Vec<&str> = key.split('.').collect();
    let mut scope_stack: Vec<String> = Vec::new();

    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed == "struct {" {
            continue;
        }

        if trimmed == "}" || trimmed == "}," {
            scope_stack.pop();
            continue;
        }

        let stmt = trimmed.strip_prefix("set ").unwrap_or(trimmed);

        let line_key = if let Some((k, _)) = stmt.split_once('=') {
            k.trim()
        } else {
            continue;
        };

        // A key whose value opens a block on the same line starts a scope.
        if stmt.ends_with('{') {
            scope_stack.push(line_key.to_string());
            continue;
        }

        let full_path = {
            let mut path = scope_stack.clone();
            path.push(line_key.to_string());
            path.join(".")
        };

        if full_path == key {
            return (idx + 1, trimmed.to_string());
        }

        let simple_key = key_parts.last().unwrap_or(&key);
        if line_key == *simple_key {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}
