use crate::core::export::render_csv;
use crate::core::flatten::flatten_document;
use crate::core::project::project;
use crate::core::{ConfigProvider, Pipeline, Record, Row, Storage, TransformResult};
use crate::utils::error::Result;

/// The events export pipeline: reads one JSON document, flattens and
/// projects its events, and writes the CSV output through the storage
/// port.
pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading events from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;

        // The whole document is parsed up front; there is no streaming.
        let document: serde_json::Value = serde_json::from_slice(&bytes)?;
        let records = flatten_document(&document);

        tracing::debug!("Flattened {} events", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let rows: Vec<Row> = data.iter().map(project).collect();
        let csv_output = render_csv(&rows)?;

        tracing::debug!("Projected {} rows onto the export columns", rows.len());
        Ok(TransformResult { rows, csv_output })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = format!(
            "{}/{}",
            self.config.output_path(),
            self.config.output_filename()
        );

        tracing::debug!(
            "Writing {} bytes to: {}",
            result.csv_output.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}
