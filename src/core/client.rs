use crate::core::{AnalysisService, ConfigProvider};
use crate::domain::catalog::sorted_unique_tissue_ids;
use crate::domain::model::{AnalysisRequest, AnalysisToken, Artifact};
use crate::utils::error::{ReactomeError, Result};
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response, StatusCode};

const DOWNLOAD_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml,application/pdf;q=0.9,*/*;q=0.8";

/// HTTP client for the Reactome AnalysisService.
pub struct ReactomeClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ReactomeClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .build()?;

        Ok(Self { config, client })
    }

    fn analysis_service_url(&self) -> String {
        format!("{}/AnalysisService", self.config.reactome_url())
    }

    fn paged_url(&self, url: &str, join_with: char) -> String {
        format!(
            "{}{}pageSize={}&page=1",
            url,
            join_with,
            self.config.page_size()
        )
    }

    fn identifiers_url(&self, project_to_human: bool, include_interactors: bool) -> String {
        let projection = if project_to_human { "projection" } else { "" };
        format!(
            "{}/identifiers/{}?null&interactors={}",
            self.analysis_service_url(),
            projection,
            include_interactors
        )
    }

    /// Submission URL and body for a request; `None` body means GET.
    fn submission(&self, request: &AnalysisRequest) -> (String, Option<String>) {
        match request {
            AnalysisRequest::Genes {
                identifiers,
                project_to_human,
                include_interactors,
            } => (
                self.paged_url(
                    &self.identifiers_url(*project_to_human, *include_interactors),
                    '&',
                ),
                Some(identifiers.clone()),
            ),
            AnalysisRequest::Species(species) => (
                self.paged_url(
                    &format!(
                        "{}/species/homoSapiens/{}",
                        self.analysis_service_url(),
                        species.db_id()
                    ),
                    '?',
                ),
                None,
            ),
            AnalysisRequest::Tissues(tissues) => (
                self.paged_url(
                    &format!(
                        "{}/identifiers/url/projection?null&interactors=false",
                        self.analysis_service_url()
                    ),
                    '&',
                ),
                // fetched by the server, not by this client
                Some(format!(
                    "https://127.0.0.1/ExperimentDigester/experiments/1/sample?included={}&omitNulls=true",
                    sorted_unique_tissue_ids(tissues)
                )),
            ),
        }
    }

    async fn fetch(&self, token: &AnalysisToken, artifact: &Artifact) -> Result<Response> {
        let url = format!("{}{}", self.analysis_service_url(), artifact.path(token));
        tracing::debug!("Downloading {} from: {}", artifact.label(), url);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.config.user_agent())
            .header(ACCEPT, DOWNLOAD_ACCEPT)
            .header(ACCEPT_ENCODING, "gzip, deflate, br")
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        ensure_ok(response, &format!("Request {}", url)).await
    }
}

async fn ensure_ok(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    tracing::debug!("{} response status: {}", operation, status);

    if status != StatusCode::OK {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("[Could not read error body: {}]", e));
        return Err(ReactomeError::ServiceError {
            operation: operation.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

#[async_trait::async_trait]
impl<C: ConfigProvider> AnalysisService for ReactomeClient<C> {
    async fn submit(&self, request: &AnalysisRequest) -> Result<String> {
        let (url, body) = self.submission(request);
        tracing::debug!("Submitting {} to: {}", request.operation_name(), url);

        let builder = match body {
            Some(body) => self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "text/plain")
                .body(body),
            None => self.client.get(&url).header(CONTENT_TYPE, "text/plain"),
        };

        let response = builder
            .header(USER_AGENT, self.config.user_agent())
            .send()
            .await?;

        let response = ensure_ok(response, request.operation_name()).await?;
        Ok(response.text().await?)
    }

    async fn download_text(&self, token: &AnalysisToken, artifact: &Artifact) -> Result<String> {
        // reqwest decodes using the charset of the Content-Type, UTF-8 otherwise
        let response = self.fetch(token, artifact).await?;
        Ok(response.text().await?)
    }

    async fn download_bytes(&self, token: &AnalysisToken, artifact: &Artifact) -> Result<Vec<u8>> {
        let response = self.fetch(token, artifact).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
