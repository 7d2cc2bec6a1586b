use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Document, Value};
use crate::error::SigilError;

use super::compound::parse_struct;
use super::value::resolve_scalar;

static SET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^set\s+([A-Za-z][_A-Za-z0-9]*)\s*=\s*(.+);").unwrap());
static ASSIGN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][_A-Za-z0-9]*)\s*=\s*(.+)").unwrap());

/// Parses a whole sigil source text into a [`Document`].
///
/// Line oriented: blank lines and `#` comments are skipped everywhere.
/// At the top level a line is a `set name = value;` constant, a `struct {`
/// block opener, or a bare `key = value` assignment; anything else is a
/// syntax error. Block lines are buffered until the closing `}` line, then
/// joined with spaces and parsed as one struct whose pairs merge into the
/// result. Constants merge last and therefore win every key collision.
pub fn parse_document(input: &str) -> Result<Document, SigilError> {
    let mut entries: IndexMap<String, Value> = IndexMap::new();
    let mut constants: IndexMap<String, Value> = IndexMap::new();
    let mut block_open: Option<usize> = None;
    let mut block_lines: Vec<&str> = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        let line_no = idx + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if block_open.is_some() {
            if line == "}" {
                let parsed = parse_struct(&block_lines.join(" "))?;
                for (key, value) in parsed {
                    entries.insert(key, value);
                }
                block_open = None;
                block_lines.clear();
            } else {
                block_lines.push(line);
            }
            continue;
        }

        if line == "struct {" {
            block_open = Some(line_no);
            continue;
        }

        if line.starts_with("set ") {
            let caps = SET_REGEX.captures(line).ok_or_else(|| SigilError::SyntaxError {
                message: format!("Malformed constant declaration: {}", line),
                line: line_no,
                hint: Some("Expected `set name = value;`".into()),
                code: Some(102),
            })?;
            let value = resolve_scalar(&caps[2], false)?;
            constants.insert(caps[1].to_string(), value);
            continue;
        }

        if let Some(caps) = ASSIGN_REGEX.captures(line) {
            let value = resolve_scalar(&caps[2], false)?;
            entries.insert(caps[1].to_string(), value);
            continue;
        }

        return Err(SigilError::SyntaxError {
            message: format!("Unrecognized statement: {}", line),
            line: line_no,
            hint: Some("Expected `set name = value;`, `struct {`, or `key = value`".into()),
            code: Some(101),
        });
    }

    if let Some(opened_at) = block_open {
        return Err(SigilError::UnterminatedBlock {
            line: opened_at,
            hint: Some("Every `struct {` needs a closing `}` on its own line".into()),
            code: Some(103),
        });
    }

    // Constants override everything else, wherever they were declared.
    for (key, value) in constants {
        entries.insert(key, value);
    }

    Ok(Document { entries })
}
