// Author: Dustin Pilgrim
// License: MIT

//! TOML emission for parsed documents.
//!
//! Two passes per table, both in insertion order: scalar and array entries
//! first as `key = value` lines, then every nested struct as its own
//! `[dotted.path]` section. Serialization is total, a well-formed
//! [`Document`] always renders.

use indexmap::IndexMap;

use crate::ast::{Document, Value};

/// Renders a document as TOML-style text.
///
/// Strings are quoted verbatim (the language has no escape syntax),
/// integers are decimal, booleans lowercase. Arrays render inline with the
/// same rules per element. No trailing newline is appended.
pub fn serialize(document: &Document) -> String {
    render_table(&document.entries, None)
}

fn render_table(entries: &IndexMap<String, Value>, parent: Option<&str>) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut sections: Vec<(String, &IndexMap<String, Value>)> = Vec::new();

    for (key, value) in entries {
        match value {
            Value::Struct(child) => {
                let path = match parent {
                    Some(prefix) => format!("{}.{}", prefix, key),
                    None => key.clone(),
                };
                sections.push((path, child));
            }
            scalar => lines.push(format!("{} = {}", key, render_value(scalar))),
        }
    }

    for (idx, (path, child)) in sections.iter().enumerate() {
        if !lines.is_empty() || idx > 0 {
            lines.push(String::new());
        }
        lines.push(format!("[{}]", path));
        lines.push(render_table(child, Some(path.as_str())));
    }

    lines.join("\n")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Integer(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        // Structs inside arrays have no section form, render them inline.
        Value::Struct(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{} = {}", key, render_value(value)))
                .collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_serialize_scalars_only() {
        let doc = parse_document("name = \"demo\"\ncount = 3\nactive = true")
            .expect("Failed to parse config");
        assert_eq!(
            serialize(&doc),
            "name = \"demo\"\ncount = 3\nactive = true"
        );
    }

    #[test]
    fn test_serialize_empty_document() {
        let doc = parse_document("").expect("Failed to parse config");
        assert_eq!(serialize(&doc), "");
    }

    #[test]
    fn test_serialize_arrays() {
        let doc = parse_document("tags = [\"a\", \"b\"]\nmix = [1, true, \"x\"]")
            .expect("Failed to parse config");
        assert_eq!(
            serialize(&doc),
            "tags = [\"a\", \"b\"]\nmix = [1, true, \"x\"]"
        );
    }

    #[test]
    fn test_serialize_end_to_end() {
        let input = r#"
        set app_name = "MyApp";
        struct {
            features = {
                dark_mode = true,
                experimental = false,
                beta_features = ["feature1", "feature2"],
            },
            settings = {
                theme = "dark",
                notifications = {
                    email = true,
                    sms = false,
                },
            },
        }
        "#;
        let expected = r#"app_name = "MyApp"

[features]
dark_mode = true
experimental = false
beta_features = ["feature1", "feature2"]

[settings]
theme = "dark"

[settings.notifications]
email = true
sms = false"#;

        let doc = parse_document(input).expect("Failed to parse config");
        assert_eq!(serialize(&doc), expected);
    }

    #[test]
    fn test_sections_follow_insertion_order() {
        let input = "struct {\nzeta = {v = 1},\nalpha = {v = 2},\n}";
        let doc = parse_document(input).expect("Failed to parse config");
        assert_eq!(serialize(&doc), "[zeta]\nv = 1\n\n[alpha]\nv = 2");
    }

    #[test]
    fn test_document_with_only_sections_has_no_leading_blank() {
        let doc = parse_document("outer = {inner = 1}").expect("Failed to parse config");
        assert_eq!(serialize(&doc), "[outer]\ninner = 1");
    }

    #[test]
    fn test_struct_inside_array_renders_inline() {
        let doc = parse_document("probes = [{port = 80}, {port = 443}]")
            .expect("Failed to parse config");
        assert_eq!(
            serialize(&doc),
            "probes = [{port = 80}, {port = 443}]"
        );
    }

    #[test]
    fn test_nested_array_renders_inline() {
        let doc = parse_document("grid = [[1, 2], [3, 4]]").expect("Failed to parse config");
        assert_eq!(serialize(&doc), "grid = [[1, 2], [3, 4]]");
    }

    #[test]
    fn test_roundtrip_through_inline_rendering() {
        let source = "wrapped = [{a = {b = {c = 1}}}]";
        let doc = parse_document(source).expect("Failed to parse config");
        let rendered = serialize(&doc);
        let reparsed = parse_document(&rendered).expect("Failed to reparse output");
        assert_eq!(doc, reparsed);
    }

    #[test]
    fn test_roundtrip_flat_document() {
        let source = "a = 1\nb = [\"x\", \"y\"]\nc = false";
        let doc = parse_document(source).expect("Failed to parse config");
        let rendered = serialize(&doc);
        let reparsed = parse_document(&rendered).expect("Failed to reparse output");
        assert_eq!(doc, reparsed);
    }
}
