use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "convert")]
#[command(about = "Flatten a services catalog JSON into a CSV of priced variants")]
#[command(after_help = "Reads services.json when no path is given, or JSON piped on stdin.")]
pub struct CliConfig {
    /// Path to the catalog JSON
    pub input: Option<String>,

    /// Catalog file used when no path is given
    #[arg(long)]
    pub default_input: Option<String>,

    /// CSV output file
    #[arg(short, long)]
    pub output: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve(&self) -> Result<crate::config::ConvertConfig> {
        crate::config::ConvertConfig::load(
            self.input.clone(),
            self.default_input.clone(),
            self.output.clone(),
            self.config.as_deref(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &str) -> bool {
        self.full_path(path).exists()
    }

    fn locate(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.full_path(path))?;
        Ok(data)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(self.locate(path))
    }
}
