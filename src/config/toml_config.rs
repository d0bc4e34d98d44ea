use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_FILENAME: &str = "event_export_all.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub report: Option<ReportConfig>,
    pub environment: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub show_table: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` markers with the variable's value from the
    /// environment. Unset variables are left in place.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        if self.source.r#type != "file" {
            return Err(EtlError::InvalidConfigValueError {
                field: "source.type".to_string(),
                value: self.source.r#type.clone(),
                reason: "Only the 'file' source type is supported".to_string(),
            });
        }

        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if let Some(filename) = &self.load.filename {
            validation::validate_file_extensions(
                "load.filename",
                std::slice::from_ref(filename),
                &["csv"],
            )?;
        }

        Ok(())
    }

    pub fn output_filename(&self) -> &str {
        self.load.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }

    pub fn show_table(&self) -> bool {
        self.report.as_ref().map(|r| r.show_table).unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_filename(&self) -> &str {
        self.output_filename()
    }

    fn show_table(&self) -> bool {
        self.show_table()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[pipeline]
name = "events-export"
description = "Exports calendar events to CSV"
version = "1.0.0"

[source]
type = "file"
path = "data_files/event_details_1apr-2june.json"

[load]
output_path = "data_output"
filename = "event_export_all.csv"

[report]
show_table = false
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "events-export");
        assert_eq!(
            config.input_path(),
            "data_files/event_details_1apr-2june.json"
        );
        assert_eq!(config.output_filename(), "event_export_all.csv");
        assert!(!config.show_table());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_optional_sections_use_defaults() {
        let toml_content = r#"
[pipeline]
name = "events-export"
description = "test"
version = "1.0"

[source]
type = "file"
path = "events.json"

[load]
output_path = "data_output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output_filename(), "event_export_all.csv");
        assert!(config.show_table());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_EVENTS_INPUT", "data_files/from_env.json");

        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
type = "file"
path = "${TEST_EVENTS_INPUT}"

[load]
output_path = "data_output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path, "data_files/from_env.json");

        std::env::remove_var("TEST_EVENTS_INPUT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
type = "file"
path = "${TEST_EVENTS_UNSET_VAR}"

[load]
output_path = "data_output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path, "${TEST_EVENTS_UNSET_VAR}");
    }

    #[test]
    fn test_unsupported_source_type_fails_validation() {
        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
type = "api"
path = "https://example.com/events"

[load]
output_path = "data_output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_csv_filename_fails_validation() {
        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
type = "file"
path = "events.json"

[load]
output_path = "data_output"
filename = "event_export_all.xlsx"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[pipeline]
name = "file-test"
description = "File test"
version = "1.0"

[source]
type = "file"
path = "events.json"

[load]
output_path = "data_output"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
    }
}
