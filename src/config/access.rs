use super::*;
use crate::ast::Value;

impl SigilConfig {
    /// Get a typed value from the configuration using dot notation.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// let debug: bool = config.get("debug")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, path, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// if let Ok(Some(api_key)) = config.get_optional::<String>("api_key") {
    ///     println!("API key: {}", api_key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        match self.get_value(path) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(SigilError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("config.sigil").unwrap();
    /// let timeout = config.get_or("server.timeout", 30u64);
    /// let debug = config.get_or("debug", false);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get a raw `Value` from the configuration.
    ///
    /// An empty path returns the whole document as a struct. Each dot walks
    /// one level into nested structs.
    pub fn get_value(&self, path: &str) -> Result<Value, SigilError> {
        if path.trim().is_empty() {
            return Ok(Value::Struct(self.document.entries.clone()));
        }

        let segments: Vec<&str> = path.split('.').collect();

        let mut current = self
            .document
            .entries
            .get(segments[0])
            .ok_or_else(|| not_found(path))?;

        for segment in &segments[1..] {
            current = match current {
                Value::Struct(entries) => entries.get(*segment).ok_or_else(|| not_found(path))?,
                _ => return Err(not_found(path)),
            };
        }

        Ok(current.clone())
    }

    /// Get all keys at a given path level.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// let keys = config.get_keys("server")?;
    /// for key in keys {
    ///     println!("server.{}", key);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, SigilError> {
        let value = self.get_value(path)?;
        match value {
            Value::Struct(entries) => Ok(entries.keys().cloned().collect()),
            _ => Err(SigilError::TypeError {
                message: format!("Path '{}' is not a struct", path),
                line: 0,
                hint: Some("Only structs have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a configuration path exists.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("config.sigil").unwrap();
    /// if config.has("settings.notifications.email") {
    ///     println!("Email notifications are configured");
    /// }
    /// ```
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }
}

fn not_found(path: &str) -> SigilError {
    SigilError::KeyNotFound {
        path: path.to_string(),
        hint: Some("Check that the path exists in your config file".into()),
        code: Some(304),
    }
}

/// Enhance type errors with line number information from the config file.
fn enhance_error_with_line_info(e: SigilError, path: &str, raw_content: &str) -> SigilError {
    match e {
        SigilError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = helpers::find_config_line(path, raw_content);
            if line > 0 {
                SigilError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                SigilError::TypeError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}
