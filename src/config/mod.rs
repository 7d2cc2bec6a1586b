// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::error::SigilError;
use crate::parser;
use crate::toml;

mod access;
mod conversion;
mod helpers;

/// Main configuration struct that holds a parsed sigil document.
pub struct SigilConfig {
    document: Document,
    raw_content: String, // Store for error reporting
}

impl SigilConfig {
    /// Load a sigil config file.
    ///
    /// A leading `~/` in the path is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = SigilConfig::from_file("config.sigil")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SigilError> {
        let resolved = helpers::expand_home(path.as_ref())?;

        let content = fs::read_to_string(&resolved).map_err(|e| SigilError::FileError {
            message: format!("Failed to read file: {}", e),
            path: resolved.display().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(301),
        })?;

        Self::from_str(&content)
    }

    /// Load a sigil config file with fallback support.
    ///
    /// Tries to load from the primary path first. If that fails (file not
    /// found), attempts to load from the fallback path.
    pub fn from_file_with_fallback<P: AsRef<Path>>(
        primary: P,
        fallback: P,
    ) -> Result<Self, SigilError> {
        match Self::from_file(&primary) {
            Ok(config) => Ok(config),
            Err(SigilError::FileError { .. }) => {
                // Primary file not found, try fallback
                Self::from_file(&fallback).map_err(|e| match e {
                    SigilError::FileError { message, .. } => SigilError::FileError {
                        message: format!(
                            "Failed to load config from primary path '{}' or fallback path '{}': {}",
                            primary.as_ref().display(),
                            fallback.as_ref().display(),
                            message
                        ),
                        path: format!(
                            "{} (fallback: {})",
                            primary.as_ref().display(),
                            fallback.as_ref().display()
                        ),
                        hint: Some("Check that at least one of the config files exists".into()),
                        code: Some(301),
                    },
                    other => other,
                })
            }
            Err(other) => Err(other), // Pass through parse errors
        }
    }

    /// Parse a sigil config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, SigilError> {
        let document = parser::parse_document(content)?;

        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Render the whole configuration as TOML text.
    pub fn to_toml(&self) -> String {
        toml::serialize(&self.document)
    }
}
