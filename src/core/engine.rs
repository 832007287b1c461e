use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReadmeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReadmeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading company records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} company records", records.len());

        tracing::info!("Rendering README table...");
        let rendered = self.pipeline.transform(records).await?;
        tracing::info!("Rendered {} table rows", rendered.rows.len());

        tracing::info!("Assembling README...");
        let output_path = self.pipeline.load(rendered).await?;
        tracing::info!("README written to {}", output_path);

        Ok(output_path)
    }
}
