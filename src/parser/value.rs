use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::Value;
use crate::error::SigilError;

use super::compound::{parse_array, parse_struct};

static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// Classifies a single raw token into a [`Value`].
///
/// The token is trimmed and any trailing commas are stripped before
/// classification. First match wins: quoted string, integer, boolean,
/// array, struct. Anything else is passed through as an opaque string
/// when `inside_compound` is set, and rejected otherwise.
///
/// The grammar has no sign or fractional syntax, so `-5` and `3.14` are
/// opaque strings inside compounds and invalid at the top level.
pub fn resolve_scalar(token: &str, inside_compound: bool) -> Result<Value, SigilError> {
    let token = token.trim().trim_end_matches(',');

    if token.starts_with('"') && token.ends_with('"') {
        return Ok(Value::String(token.trim_matches('"').to_string()));
    }

    if INTEGER_REGEX.is_match(token) {
        return token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| SigilError::ValueError {
                token: token.to_string(),
                hint: Some("Integers must fit in 64 bits".into()),
                code: Some(202),
            });
    }

    if token.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if token.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }

    if token.starts_with('[') && token.ends_with(']') {
        return Ok(Value::Array(parse_array(&token[1..token.len() - 1])?));
    }
    if token.starts_with('{') && token.ends_with('}') {
        return Ok(Value::Struct(parse_struct(&token[1..token.len() - 1])?));
    }

    if inside_compound {
        // Bare words inside arrays and structs pass through untouched.
        return Ok(Value::String(token.to_string()));
    }

    Err(SigilError::ValueError {
        token: token.to_string(),
        hint: Some("Expected a quoted string, integer, boolean, array, or struct".into()),
        code: Some(201),
    })
}
