use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub paths: Option<PathsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub default_input: Option<String>,
    pub output: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConvertError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(paths) = &self.paths {
            if let Some(default_input) = &paths.default_input {
                validate_path("paths.default_input", default_input)?;
            }
            if let Some(output) = &paths.output {
                validate_path("paths.output", output)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_paths() {
        let config = TomlConfig::from_toml_str(
            r#"
[paths]
default_input = "catalog/services.json"
output = "exports/services.csv"
"#,
        )
        .unwrap();

        let paths = config.paths.unwrap();
        assert_eq!(paths.default_input.as_deref(), Some("catalog/services.json"));
        assert_eq!(paths.output.as_deref(), Some("exports/services.csv"));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.paths.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SERVICES_CSV_TEST_DIR", "/srv/catalog");

        let config = TomlConfig::from_toml_str(
            r#"
[paths]
output = "${SERVICES_CSV_TEST_DIR}/services.csv"
default_input = "${SERVICES_CSV_UNSET_VAR}/services.json"
"#,
        )
        .unwrap();
        let paths = config.paths.unwrap();

        assert_eq!(paths.output.as_deref(), Some("/srv/catalog/services.csv"));
        assert_eq!(
            paths.default_input.as_deref(),
            Some("${SERVICES_CSV_UNSET_VAR}/services.json")
        );

        std::env::remove_var("SERVICES_CSV_TEST_DIR");
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[paths\noutput = 1").unwrap_err();
        assert!(matches!(err, ConvertError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file_validates() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[paths]\noutput = \"\"\n")
            .unwrap();

        assert!(TomlConfig::from_file(temp_file.path()).is_err());
    }
}
