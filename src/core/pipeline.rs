use crate::core::render::render_table;
use crate::core::{ConfigProvider, CorpInfo, CorpRecord, Pipeline, RenderResult, Storage};
use crate::domain::services::{format_row, sort_listings};
use crate::utils::error::{ReadmeError, Result};
use std::path::Path;

pub struct ReadmePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReadmePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads and parses a single record file. Any failure, whether I/O or a
    /// malformed document, is folded into a `RecordError` carrying the file
    /// name so the loader can log and drop it without aborting the batch.
    async fn read_record(&self, path: &str, file: &str) -> Result<CorpInfo> {
        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| ReadmeError::RecordError {
                file: file.to_string(),
                reason: e.to_string(),
            })?;

        let record: CorpRecord =
            serde_json::from_slice(&bytes).map_err(|e| ReadmeError::RecordError {
                file: file.to_string(),
                reason: e.to_string(),
            })?;

        Ok(record.into())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReadmePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CorpInfo>> {
        let files = self.storage.list_files(self.config.data_dir()).await?;
        tracing::debug!(
            "Found {} entries in {}",
            files.len(),
            self.config.data_dir()
        );

        let mut records = Vec::new();
        for file in files {
            let is_json = Path::new(&file)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "json")
                .unwrap_or(false);
            if !is_json {
                continue;
            }

            let path = format!("{}/{}", self.config.data_dir(), file);
            match self.read_record(&path, &file).await {
                Ok(info) => records.push(info),
                Err(e) => tracing::error!("{}", e),
            }
        }

        Ok(records)
    }

    async fn transform(&self, mut records: Vec<CorpInfo>) -> Result<RenderResult> {
        sort_listings(&mut records);

        let rows: Vec<_> = records.iter().map(format_row).collect();
        let markdown = render_table(&rows);

        Ok(RenderResult { rows, markdown })
    }

    async fn load(&self, result: RenderResult) -> Result<String> {
        let template_bytes = self.storage.read_file(self.config.template_path()).await?;
        let template = String::from_utf8(template_bytes)?;

        let document = format!("{}\n{}", template, result.markdown);

        tracing::debug!(
            "Writing README ({} bytes) to {}",
            document.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), document.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
