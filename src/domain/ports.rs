use crate::domain::model::{AnalysisRequest, AnalysisToken, Artifact};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Resolved settings for talking to a Reactome server.
pub trait ConfigProvider: Send + Sync {
    fn reactome_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;
    fn page_size(&self) -> u32;
}

#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submits an analysis and returns the raw response body.
    async fn submit(&self, request: &AnalysisRequest) -> Result<String>;
    async fn download_text(&self, token: &AnalysisToken, artifact: &Artifact) -> Result<String>;
    async fn download_bytes(&self, token: &AnalysisToken, artifact: &Artifact) -> Result<Vec<u8>>;
}
