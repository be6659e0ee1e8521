use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("No input available")]
    Usage { default_input: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    /// 給終端使用者看的錯誤訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::CsvError(e) => format!("Failed to write CSV output: {}", e),
            ConvertError::IoError(e) => format!("File operation failed: {}", e),
            ConvertError::SerializationError(e) => {
                format!("Input is not valid JSON (line {}, column {}): {}", e.line(), e.column(), e)
            }
            ConvertError::InputNotFound { path } => {
                format!("Input file '{}' does not exist", path)
            }
            ConvertError::Usage { default_input } => usage_text(default_input),
            ConvertError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ConvertError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid configuration value '{}' for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::CsvError(_) => "Check that the output location is writable",
            ConvertError::IoError(_) => "Check file permissions and that the path is correct",
            ConvertError::SerializationError(_) => {
                "Validate the input with a JSON linter; the catalog must be a JSON object"
            }
            ConvertError::InputNotFound { .. } => "Pass an existing file path or pipe JSON on stdin",
            ConvertError::Usage { .. } => "Provide an input file or pipe the catalog on stdin",
            ConvertError::ConfigError { .. } | ConvertError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the TOML configuration file"
            }
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, ConvertError::Usage { .. })
    }
}

/// 兩種呼叫方式與預設輸入檔位置
pub fn usage_text(default_input: &str) -> String {
    format!(
        "Usage: convert [path/to/services.json]\n   or: cat services.json | convert\nExpected JSON file at: {}",
        default_input
    )
}

pub type Result<T> = std::result::Result<T, ConvertError>;
