use crate::core::report::ReportGenerator;
use crate::core::tabular;
use crate::core::{AnalysisService, Storage};
use crate::domain::catalog::{ResourceType, SpeciesName};
use crate::domain::model::{AnalysisRequest, AnalysisSummary, AnalysisToken, Artifact};
use crate::utils::error::{ReactomeError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Where to put each analysis artifact. Unset paths are not downloaded.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub pathways_file: Option<PathBuf>,
    pub entities_found_file: Option<PathBuf>,
    pub entities_not_found_file: Option<PathBuf>,
    pub result_json_file: Option<PathBuf>,
    pub report_pdf_file: Option<PathBuf>,
    pub html_report_file: Option<PathBuf>,
    pub resource: ResourceType,
    pub report_species: SpeciesName,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            pathways_file: None,
            entities_found_file: None,
            entities_not_found_file: None,
            result_json_file: None,
            report_pdf_file: None,
            html_report_file: None,
            resource: ResourceType::Total,
            report_species: SpeciesName::Human,
        }
    }
}

impl OutputOptions {
    pub fn needs_pathways(&self) -> bool {
        self.pathways_file.is_some() || self.html_report_file.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.needs_pathways()
            && self.entities_found_file.is_none()
            && self.entities_not_found_file.is_none()
            && self.result_json_file.is_none()
            && self.report_pdf_file.is_none()
    }

    /// Every requested output path, labelled with its option name.
    pub fn requested_paths(&self) -> Vec<(&'static str, &Path)> {
        [
            ("pathways", &self.pathways_file),
            ("entities_found", &self.entities_found_file),
            ("entities_not_found", &self.entities_not_found_file),
            ("result_json", &self.result_json_file),
            ("report_pdf", &self.report_pdf_file),
            ("html_report", &self.html_report_file),
        ]
        .into_iter()
        .filter_map(|(name, path)| path.as_deref().map(|p| (name, p)))
        .collect()
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub token: AnalysisToken,
    pub written_files: Vec<PathBuf>,
    pub pathway_count: Option<usize>,
}

/// Pulls the analysis token out of a submission response.
pub fn extract_token(body: &str) -> Result<AnalysisToken> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let re = TOKEN_RE.get_or_init(|| {
        Regex::new(r#""token"\s*:\s*"([^"]+)""#).expect("token pattern is a valid regex")
    });

    re.captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| AnalysisToken::new(m.as_str()))
        .ok_or(ReactomeError::TokenNotFound)
}

fn log_summary(body: &str) {
    match serde_json::from_str::<AnalysisSummary>(body) {
        Ok(summary) => {
            tracing::info!(
                "Analysis type: {}, pathways found: {}, identifiers not found: {}",
                summary.summary.analysis_type.as_deref().unwrap_or("unknown"),
                summary
                    .pathways_found
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string()),
                summary
                    .identifiers_not_found
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string()),
            );
            for warning in &summary.warnings {
                tracing::warn!("Service warning: {}", warning);
            }
        }
        Err(e) => tracing::debug!("Could not decode analysis summary: {}", e),
    }
}

fn storage_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Reads a UTF-8 text file through `storage`.
pub async fn read_text<S: Storage>(storage: &S, path: &Path) -> Result<String> {
    let raw = storage.read_file(&storage_path(path)).await?;
    String::from_utf8(raw).map_err(|e| ReactomeError::ParseError {
        message: format!("{} is not valid UTF-8: {}", path.display(), e),
    })
}

/// Runs one analysis end to end: submit, read the token, fetch the outputs.
pub struct AnalysisRunner<A: AnalysisService, S: Storage> {
    service: A,
    storage: S,
    report: ReportGenerator,
}

impl<A: AnalysisService, S: Storage> AnalysisRunner<A, S> {
    pub fn new(service: A, storage: S, reactome_url: &str) -> Self {
        Self {
            service,
            storage,
            report: ReportGenerator::new(reactome_url),
        }
    }

    pub async fn run(
        &self,
        request: &AnalysisRequest,
        options: &OutputOptions,
    ) -> Result<AnalysisOutcome> {
        tracing::info!("Submitting {}", request.operation_name().to_lowercase());
        let body = self.service.submit(request).await?;

        log_summary(&body);
        let token = extract_token(&body)?;
        tracing::info!("Analysis token: {}", token);

        self.fetch_outputs(&token, options).await
    }

    /// Downloads every requested artifact of an already finished analysis.
    pub async fn fetch_outputs(
        &self,
        token: &AnalysisToken,
        options: &OutputOptions,
    ) -> Result<AnalysisOutcome> {
        let mut written_files = Vec::new();
        let mut pathway_count = None;

        if options.needs_pathways() {
            let csv = self
                .service
                .download_text(token, &Artifact::Pathways(options.resource))
                .await?;

            if let Some(path) = &options.pathways_file {
                self.storage
                    .write_file(&storage_path(path), csv.as_bytes())
                    .await?;
                written_files.push(path.clone());
            }

            if let Some(path) = &options.html_report_file {
                let data = tabular::parse(&csv)?;
                pathway_count = Some(data.rows.len());
                let html = self.report.render(&data, token.as_str());
                self.storage
                    .write_file(&storage_path(path), html.as_bytes())
                    .await?;
                tracing::info!("HTML report with {} pathways written", data.rows.len());
                written_files.push(path.clone());
            }
        }

        let plain_downloads = [
            (
                Artifact::EntitiesFound(options.resource),
                &options.entities_found_file,
            ),
            (Artifact::EntitiesNotFound, &options.entities_not_found_file),
            (Artifact::ResultJson, &options.result_json_file),
            (
                Artifact::ReportPdf(options.report_species),
                &options.report_pdf_file,
            ),
        ];

        for (artifact, target) in plain_downloads {
            let Some(path) = target else {
                continue;
            };

            let data = if artifact.is_binary() {
                self.service.download_bytes(token, &artifact).await?
            } else {
                self.service
                    .download_text(token, &artifact)
                    .await?
                    .into_bytes()
            };

            tracing::debug!("Writing {} ({} bytes)", artifact.label(), data.len());
            self.storage.write_file(&storage_path(path), &data).await?;
            written_files.push(path.clone());
        }

        Ok(AnalysisOutcome {
            token: token.clone(),
            written_files,
            pathway_count,
        })
    }
}

/// Renders a pathways CSV already on disk into an HTML report.
///
/// Returns the number of pathways in the report.
pub async fn render_local_report<S: Storage>(
    storage: &S,
    report: &ReportGenerator,
    pathways_csv: &Path,
    token: &AnalysisToken,
    html_report: &Path,
) -> Result<usize> {
    let text = read_text(storage, pathways_csv).await?;
    let data = tabular::parse(&text)?;
    let html = report.render(&data, token.as_str());
    storage
        .write_file(&storage_path(html_report), html.as_bytes())
        .await?;

    Ok(data.rows.len())
}
