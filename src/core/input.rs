use crate::core::{Catalog, ConfigProvider, Storage};
use crate::utils::error::{ConvertError, Result};
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(String),
    Stdin,
}

/// 決定目錄資料來源：參數 → 預設檔 → 管線輸入 → 使用說明
pub fn resolve_source<S: Storage, C: ConfigProvider>(
    storage: &S,
    config: &C,
    stdin_is_terminal: bool,
) -> Result<InputSource> {
    if let Some(path) = config.input_path() {
        if !storage.exists(path) {
            return Err(ConvertError::InputNotFound {
                path: path.to_string(),
            });
        }
        tracing::debug!("Using input file from argument: {}", path);
        return Ok(InputSource::File(path.to_string()));
    }

    let default_input = config.default_input_path();
    if storage.exists(default_input) {
        tracing::debug!("Using default input file: {}", default_input);
        return Ok(InputSource::File(default_input.to_string()));
    }

    if !stdin_is_terminal {
        tracing::debug!("No input file found, reading catalog from stdin");
        return Ok(InputSource::Stdin);
    }

    Err(ConvertError::Usage {
        default_input: storage.locate(default_input),
    })
}

pub fn read_source<S: Storage, R: Read + ?Sized>(
    source: &InputSource,
    storage: &S,
    stdin: &mut R,
) -> Result<Vec<u8>> {
    match source {
        InputSource::File(path) => storage.read_file(path),
        InputSource::Stdin => {
            let mut data = Vec::new();
            stdin.read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

pub fn parse_catalog(data: &[u8]) -> Result<Catalog> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    Ok(Catalog::from_value(value))
}
