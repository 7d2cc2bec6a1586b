// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::{SigilError, Value};

impl TryFrom<Value> for String {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(SigilError::TypeError {
                message: format!("Expected string, got {:?}", value),
                line: 0,
                hint: Some("Use a quoted string value in your config".into()),
                code: Some(401),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => i32::try_from(n).map_err(|_| SigilError::TypeError {
                message: format!("Integer {} out of range for i32", n),
                line: 0,
                hint: Some("Use a number within i32 range".into()),
                code: Some(412),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n as f64),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n as f32),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u8 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => u8::try_from(n).map_err(|_| SigilError::TypeError {
                message: format!("Integer {} out of range for u8", n),
                line: 0,
                hint: Some("Use a number between 0 and 255".into()),
                code: Some(407),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => u16::try_from(n).map_err(|_| SigilError::TypeError {
                message: format!("Integer {} out of range for u16", n),
                line: 0,
                hint: Some("Use a number between 0 and 65535".into()),
                code: Some(403),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => u32::try_from(n).map_err(|_| SigilError::TypeError {
                message: format!("Integer {} out of range for u32", n),
                line: 0,
                hint: Some("Use a number between 0 and 4294967295".into()),
                code: Some(408),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => u64::try_from(n).map_err(|_| SigilError::TypeError {
                message: format!("Integer {} out of range for u64", n),
                line: 0,
                hint: Some("Use a positive number".into()),
                code: Some(406),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => usize::try_from(n).map_err(|_| SigilError::TypeError {
                message: format!("Integer {} out of range for usize", n),
                line: 0,
                hint: Some("Use a positive integer".into()),
                code: Some(409),
            }),
            _ => Err(SigilError::TypeError {
                message: format!("Expected integer, got {:?}", value),
                line: 0,
                hint: Some("Use an integer value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            // Misspelled booleans inside compounds survive parsing as bare
            // strings, catch the common typos here.
            Value::String(ref s)
                if s.to_lowercase().starts_with("tru") || s.to_lowercase().starts_with("fal") =>
            {
                Err(SigilError::TypeError {
                    message: format!(
                        "Invalid boolean value '{}'. Did you mean 'true' or 'false'?",
                        s
                    ),
                    line: 0,
                    hint: None,
                    code: Some(404),
                })
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected boolean, got {:?}", value),
                line: 0,
                hint: None,
                code: Some(404),
            }),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = SigilError>,
{
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) => {
                let mut result = Vec::new();
                for item in arr {
                    result.push(T::try_from(item)?);
                }
                Ok(result)
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected array, got {:?}", value),
                line: 0,
                hint: Some("Use an array [...] in your config".into()),
                code: Some(405),
            }),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, Value> {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Struct(entries) => Ok(entries),
            _ => Err(SigilError::TypeError {
                message: format!("Expected struct, got {:?}", value),
                line: 0,
                hint: Some("Use a struct {...} in your config".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for IndexMap<String, String> {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Struct(entries) => {
                let mut map = IndexMap::new();
                for (key, val) in entries {
                    let string_val = String::try_from(val)?;
                    map.insert(key, string_val);
                }
                Ok(map)
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected struct, got {:?}", value),
                line: 0,
                hint: Some("Use a struct {...} with string values".into()),
                code: Some(410),
            }),
        }
    }
}

impl TryFrom<Value> for (String, String) {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) if arr.len() == 2 => {
                let first = String::try_from(arr[0].clone())?;
                let second = String::try_from(arr[1].clone())?;
                Ok((first, second))
            }
            _ => Err(SigilError::TypeError {
                message: "Expected array with exactly 2 string elements".into(),
                line: 0,
                hint: Some("Use [\"key\", \"value\"] format".into()),
                code: Some(411),
            }),
        }
    }
}

impl TryFrom<Value> for (String, Value) {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) if arr.len() == 2 => {
                let key = String::try_from(arr[0].clone())?;
                let val = arr[1].clone();
                Ok((key, val))
            }
            _ => Err(SigilError::TypeError {
                message: "Expected array with exactly 2 elements (key and value)".into(),
                line: 0,
                hint: Some("Use [\"key\", value] format".into()),
                code: Some(411),
            }),
        }
    }
}

impl SigilError {
    /// Helper for file-related errors when writing conversion output.
    ///
    /// Keeps a consistent error code and a friendly default hint.
    pub fn file_error(message: String, path: String) -> Self {
        SigilError::FileError {
            message,
            path,
            hint: Some("Check file path and permissions".into()),
            code: Some(302),
        }
    }
}
