use crate::core::report::render_table;
use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages and reports progress on
/// stdout. The stages run strictly one after another.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    show_table: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P, show_table: bool) -> Self {
        Self {
            pipeline,
            show_table,
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting events export...");

        // Extract
        println!("Loading events...");
        let events = self.pipeline.extract().await?;
        println!("Loaded {} events from the JSON file", events.len());

        // Transform
        println!("Transforming events...");
        let result = self.pipeline.transform(events).await?;
        println!("Prepared {} rows", result.rows.len());

        if self.show_table {
            println!("{}", render_table(&result.rows));
        }

        // Load
        println!("Writing CSV...");
        let row_count = result.rows.len();
        let output_path = self.pipeline.load(result).await?;
        println!("Exported {} events to {}", row_count, output_path);

        Ok(output_path)
    }
}
