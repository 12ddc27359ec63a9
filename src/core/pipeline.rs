use crate::core::{parser, render, transformer, validator};
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::Result;

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;
        let text = String::from_utf8_lossy(&raw);

        parser::parse_records(&text, self.config.input_format())
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let validation = validator::validate(&data);
        if !validation.is_valid {
            tracing::warn!(
                "Validation failed: {}",
                validation.error_message.as_deref().unwrap_or("unknown")
            );
            return Ok(TransformResult {
                validation,
                analysis: None,
            });
        }

        let analysis = transformer::transform(&data)?;
        tracing::debug!("Analyzed {} records", analysis.total_records);

        Ok(TransformResult {
            validation,
            analysis: Some(analysis),
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let format_label = self.config.input_format().to_uppercase();
        let report = render::render_report(&format_label, &result.validation, result.analysis.as_ref());

        tracing::debug!("Writing report ({} bytes) to storage", report.len());
        self.storage.write_file("report.md", report.as_bytes()).await?;

        // Machine-readable companion, only when the analysis ran.
        if let Some(analysis) = &result.analysis {
            let json_data = serde_json::to_string_pretty(analysis)?;
            self.storage
                .write_file("analysis.json", json_data.as_bytes())
                .await?;
        }

        Ok(format!("{}/report.md", self.config.output_path()))
    }
}
