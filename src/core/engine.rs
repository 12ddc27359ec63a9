use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting report pipeline...");

        // Extract
        println!("Extracting records...");
        let raw_data = self.pipeline.extract().await?;
        println!("Extracted {} records", raw_data.len());

        // Validate + transform
        println!("Validating and transforming...");
        let result = self.pipeline.transform(raw_data).await?;
        match &result.analysis {
            Some(analysis) => println!("Analyzed {} records", analysis.total_records),
            None => println!("Validation failed, skipping analysis"),
        }

        // Render + load
        println!("Rendering report...");
        let output_path = self.pipeline.load(result).await?;
        println!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
