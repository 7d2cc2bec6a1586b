// Author: Dustin Pilgrim
// License: MIT

use std::fs;

use crate::ast::Document;
use crate::error::SigilError;
use crate::parser::parse_document;

/// Export a parsed document to pretty-printed JSON.
///
/// Converts all sigil values to their JSON equivalents:
/// - Strings, integers, booleans → direct mapping
/// - Arrays, structs → nested JSON structures
///
/// Key order follows the document's insertion order: serialization streams
/// straight from the underlying `IndexMap`, nothing is re-sorted.
///
/// # Examples
/// ```no_run
/// use sigil_cfg::{export, parser};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = parser::parse_document("port = 8080")?;
/// let json = export::export_document_to_json(&doc)?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, SigilError> {
    serde_json::to_string_pretty(doc).map_err(|e| SigilError::ExportError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Export a sigil file directly to JSON.
///
/// Convenience function that reads, parses, and exports in one call.
///
/// # Examples
/// ```no_run
/// use sigil_cfg::export::export_sigil_file;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let json = export_sigil_file("config.sigil")?;
/// println!("{}", json);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
/// Returns error if the file doesn't exist or contains invalid sigil syntax.
pub fn export_sigil_file(path: &str) -> Result<String, SigilError> {
    let input = fs::read_to_string(path).map_err(|e| SigilError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;

    let doc = parse_document(&input)?;
    export_document_to_json(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_export_demo_file_to_json() {
        let input =
            fs::read_to_string("demos/example.sigil").expect("Failed to read example.sigil");
        let doc = parse_document(&input).expect("Failed to parse example.sigil");

        let json_output = export_document_to_json(&doc).expect("Failed to export document to JSON");

        println!("--- Exported JSON ---\n{}", json_output);

        let deserialized: serde_json::Value = serde_json::from_str(&json_output).unwrap();
        assert_eq!(deserialized["app_name"], "MyApp");
        assert_eq!(deserialized["features"]["dark_mode"], true);
        assert_eq!(deserialized["settings"]["notifications"]["sms"], false);
    }

    #[test]
    fn test_export_nested_struct() {
        let doc = parse_document("server = {host = \"localhost\", port = 8080}")
            .expect("Failed to parse config");

        let json_output = export_document_to_json(&doc).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["server"]["host"], "localhost");
        assert_eq!(v["server"]["port"], 8080);
    }

    #[test]
    fn test_export_preserves_insertion_order() {
        let doc = parse_document("zulu = 1\nalpha = 2").expect("Failed to parse config");
        let json_output = export_document_to_json(&doc).unwrap();

        let zulu = json_output.find("\"zulu\"").unwrap();
        let alpha = json_output.find("\"alpha\"").unwrap();
        assert!(zulu < alpha);
    }

    #[test]
    fn test_export_array_of_structs() {
        let doc = parse_document("probes = [{port = 80}, {port = 443}]")
            .expect("Failed to parse config");

        let v: serde_json::Value =
            serde_json::from_str(&export_document_to_json(&doc).unwrap()).unwrap();
        assert!(v["probes"].is_array());
        assert_eq!(v["probes"][1]["port"], 443);
    }

    #[test]
    fn test_export_missing_file() {
        let result = export_sigil_file("no/such/file.sigil");
        assert!(matches!(result, Err(SigilError::FileError { .. })));
    }
}
