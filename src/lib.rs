pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{cli::LocalStorage, ConvertConfig};
pub use core::{etl::ConvertEngine, pipeline::CatalogPipeline};
pub use utils::error::{ConvertError, Result};
