use crate::domain::model::{CorpInfo, RenderResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn list_files(&self, path: &str)
        -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn template_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CorpInfo>>;
    async fn transform(&self, records: Vec<CorpInfo>) -> Result<RenderResult>;
    async fn load(&self, result: RenderResult) -> Result<String>;
}
