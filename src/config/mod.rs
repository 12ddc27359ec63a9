pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "revenue-report")]
#[command(about = "Validates monthly revenue records and renders a growth analysis report")]
pub struct CliConfig {
    /// Input file holding the monthly records
    #[arg(long, required_unless_present = "config")]
    pub input: Option<String>,

    /// Input format: csv or json
    #[arg(long, default_value = "json")]
    pub format: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// TOML pipeline configuration; replaces the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn input_format(&self) -> &str {
        &self.format
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validation::validate_required_field("input", &self.input)?;
        validation::validate_path("input", input)?;
        validation::validate_input_format("format", &self.format)?;
        validation::validate_path("output_path", &self.output_path)
    }
}
