pub mod etl;
pub mod flatten;
pub mod input;
pub mod output;
pub mod pipeline;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{Catalog, LoadSummary, Row, Service, Variant};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
