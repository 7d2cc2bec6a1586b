use std::fmt;

/// The main error type for sigil parsing, conversion, and export.
#[derive(Debug, Clone, PartialEq)]
pub enum SigilError {
    SyntaxError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when the input ends inside an open `struct {` block.
    UnterminatedBlock {
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a scalar token cannot be classified.
    ValueError {
        token: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by config access when a dotted path does not resolve.
    KeyNotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    ExportError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for SigilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigilError::SyntaxError { message, line, hint, code } =>
                write!(f, "[SIGIL] Syntax Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::UnterminatedBlock { line, hint, code } =>
                write!(f, "[SIGIL] Unterminated struct block opened at line {}{}{}",
                    line,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::ValueError { token, hint, code } =>
                write!(f, "[SIGIL] Invalid Value '{}'{}{}",
                    token,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::FileError { message, path, hint, code } =>
                write!(f, "[SIGIL] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::KeyNotFound { path, hint, code } =>
                write!(f, "[SIGIL] Key Error: '{}' not found{}{}",
                    path,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::TypeError { message, line, hint, code } =>
                write!(f, "[SIGIL] Type Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::ExportError { message, hint, code } =>
                write!(f, "[SIGIL] Export Error: {}{}{}",
                    message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for SigilError {}
