pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_FILE: &str = "services.json";
pub const DEFAULT_OUTPUT_FILE: &str = "services.csv";

/// 啟動時一次決定好的路徑設定（命令列 > TOML > 預設值）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input_path: Option<String>,
    pub default_input_path: String,
    pub output_path: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            default_input_path: DEFAULT_INPUT_FILE.to_string(),
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl ConvertConfig {
    pub fn merge(
        input_path: Option<String>,
        default_input: Option<String>,
        output: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        let paths = file.and_then(|f| f.paths.as_ref());

        Self {
            input_path,
            default_input_path: default_input
                .or_else(|| paths.and_then(|p| p.default_input.clone()))
                .unwrap_or(defaults.default_input_path),
            output_path: output
                .or_else(|| paths.and_then(|p| p.output.clone()))
                .unwrap_or(defaults.output_path),
        }
    }

    pub fn load(
        input_path: Option<String>,
        default_input: Option<String>,
        output: Option<String>,
        config_file: Option<&str>,
    ) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };

        Ok(Self::merge(input_path, default_input, output, file.as_ref()))
    }
}

impl ConfigProvider for ConvertConfig {
    fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    fn default_input_path(&self) -> &str {
        &self.default_input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input_path {
            validate_path("input", input)?;
        }
        validate_path("default_input", &self.default_input_path)?;
        validate_path("output", &self.output_path)?;
        Ok(())
    }
}
