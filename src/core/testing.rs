use crate::core::{ConfigProvider, Storage};
use crate::utils::error::{ConvertError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let storage = Self::new();
        for (path, content) in files {
            storage
                .files
                .borrow_mut()
                .insert(path.to_string(), content.as_bytes().to_vec());
        }
        storage
    }

    pub fn get_file(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl Storage for MockStorage {
    fn exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn locate(&self, path: &str) -> String {
        format!("/mock/{}", path)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            ConvertError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        self.files
            .borrow_mut()
            .insert(path.to_string(), data.to_vec());
        Ok(path.to_string())
    }
}

pub struct MockConfig {
    input_path: Option<String>,
    default_input_path: String,
    output_path: String,
}

impl MockConfig {
    pub fn new(input_path: Option<&str>) -> Self {
        Self {
            input_path: input_path.map(str::to_string),
            default_input_path: "services.json".to_string(),
            output_path: "services.csv".to_string(),
        }
    }
}

impl ConfigProvider for MockConfig {
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
