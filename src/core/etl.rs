use crate::core::{LoadSummary, Pipeline};
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<LoadSummary> {
        tracing::info!("Starting conversion...");

        // Extract
        let catalog = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} services ({} variants)",
            catalog.services.len(),
            catalog.variant_count()
        );

        // Transform
        let rows = self.pipeline.transform(catalog)?;
        tracing::info!("Transformed {} rows", rows.len());

        // Load
        let summary = self.pipeline.load(rows)?;
        tracing::info!("Output saved to: {}", summary.output_path);

        Ok(summary)
    }
}
