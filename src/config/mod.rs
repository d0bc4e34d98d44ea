pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "events-etl")]
#[command(about = "Exports calendar events from a nested JSON dump to CSV")]
pub struct CliConfig {
    #[arg(long, default_value = "data_files/event_details_1apr-2june.json")]
    pub input: String,

    #[arg(long, default_value = "data_output")]
    pub output_path: String,

    #[arg(long, default_value = "event_export_all.csv")]
    pub filename: String,

    #[arg(long, help = "Skip the console table")]
    pub no_table: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Load settings from a TOML file instead")]
    pub config: Option<String>,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_filename(&self) -> &str {
        &self.filename
    }

    fn show_table(&self) -> bool {
        !self.no_table
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output-path", &self.output_path)?;
        validation::validate_file_extensions(
            "filename",
            std::slice::from_ref(&self.filename),
            &["csv"],
        )?;
        Ok(())
    }
}
