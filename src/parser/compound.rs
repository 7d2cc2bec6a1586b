use indexmap::IndexMap;

use crate::ast::Value;
use crate::error::SigilError;

use super::value::resolve_scalar;

/// Splits an array interior (the text between `[` and `]`) into elements.
///
/// A single left-to-right scan. Commas separate elements only at bracket
/// depth zero and outside quotes; a closing bracket that returns the depth
/// to zero completes the buffered element immediately, so nested arrays and
/// structs keep their internal commas. Unbalanced input is not validated,
/// the depth is simply allowed to go negative.
pub fn parse_array(interior: &str) -> Result<Vec<Value>, SigilError> {
    let mut elements = Vec::new();
    let mut buffer = String::new();
    let mut depth: i32 = 0;
    let mut in_quotes = false;

    for ch in interior.chars() {
        match ch {
            '"' if depth == 0 => {
                in_quotes = !in_quotes;
                buffer.push(ch);
            }
            '[' | '{' if !in_quotes => {
                depth += 1;
                buffer.push(ch);
            }
            ']' | '}' if !in_quotes => {
                depth -= 1;
                buffer.push(ch);
                if depth == 0 {
                    elements.push(resolve_scalar(buffer.trim(), true)?);
                    buffer.clear();
                }
            }
            ',' if !in_quotes && depth == 0 => {
                if !buffer.trim().is_empty() {
                    elements.push(resolve_scalar(buffer.trim(), true)?);
                }
                buffer.clear();
            }
            _ => buffer.push(ch),
        }
    }

    if !buffer.trim().is_empty() {
        elements.push(resolve_scalar(buffer.trim(), true)?);
    }

    Ok(elements)
}

/// Splits a struct interior (the text between `{` and `}`) into key/value
/// pairs, preserving insertion order.
///
/// Same scan discipline as [`parse_array`] plus a pending-key slot: `=` at
/// depth zero captures the buffer as the key, `,` at depth zero closes the
/// pair. A comma with no pending key is a no-op, and a trailing key with an
/// empty value buffer is dropped. Duplicate keys keep their first position
/// and take the last value.
pub fn parse_struct(interior: &str) -> Result<IndexMap<String, Value>, SigilError> {
    let mut entries = IndexMap::new();
    let mut buffer = String::new();
    let mut pending_key: Option<String> = None;
    let mut depth: i32 = 0;
    let mut in_quotes = false;

    for ch in interior.chars() {
        match ch {
            '"' if depth == 0 => {
                in_quotes = !in_quotes;
                buffer.push(ch);
            }
            '[' | '{' if !in_quotes => {
                depth += 1;
                buffer.push(ch);
            }
            ']' | '}' if !in_quotes => {
                depth -= 1;
                buffer.push(ch);
            }
            '=' if depth == 0 && !in_quotes => {
                let key = buffer.trim();
                pending_key = if key.is_empty() {
                    None
                } else {
                    Some(key.to_string())
                };
                buffer.clear();
            }
            ',' if depth == 0 && !in_quotes => {
                if let Some(key) = pending_key.take() {
                    entries.insert(key, resolve_scalar(buffer.trim(), true)?);
                }
                buffer.clear();
            }
            _ => buffer.push(ch),
        }
    }

    if !buffer.trim().is_empty() {
        if let Some(key) = pending_key.take() {
            entries.insert(key, resolve_scalar(buffer.trim(), true)?);
        }
    }

    Ok(entries)
}
