use crate::domain::catalog::{ResourceType, SpeciesName, TissueName};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One data row of a downloaded CSV, keyed by header name.
pub type Row = HashMap<String, String>;

/// Parsed shape of a downloaded CSV artifact.
///
/// Every row holds one entry per header; short source rows are padded with
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Opaque identifier of one server-side analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisToken(String);

impl AnalysisToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The subset of the analysis response that is worth logging.
///
/// Decoding is lenient: every field the service may omit is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub summary: SummaryInfo,
    pub pathways_found: Option<u64>,
    pub identifiers_not_found: Option<u64>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInfo {
    pub token: String,
    #[serde(rename = "type")]
    pub analysis_type: Option<String>,
    pub projection: Option<bool>,
    pub interactors: Option<bool>,
    pub sample_name: Option<String>,
}

/// What gets submitted to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Newline separated identifiers, sent verbatim as the request body.
    Genes {
        identifiers: String,
        project_to_human: bool,
        include_interactors: bool,
    },
    Species(SpeciesName),
    Tissues(Vec<TissueName>),
}

impl AnalysisRequest {
    pub fn operation_name(&self) -> &'static str {
        match self {
            AnalysisRequest::Genes { .. } => "Gene analysis",
            AnalysisRequest::Species(_) => "Species analysis",
            AnalysisRequest::Tissues(_) => "Tissue analysis",
        }
    }
}

/// A downloadable result of a finished analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Pathways(ResourceType),
    EntitiesFound(ResourceType),
    EntitiesNotFound,
    ResultJson,
    ReportPdf(SpeciesName),
}

impl Artifact {
    /// Path of the artifact below the analysis service root.
    pub fn path(&self, token: &AnalysisToken) -> String {
        match self {
            Artifact::Pathways(resource) => {
                format!("/download/{}/pathways/{}/pathways.csv", token, resource)
            }
            Artifact::EntitiesFound(resource) => format!(
                "/download/{}/entities/found/{}/entities_found.csv",
                token, resource
            ),
            Artifact::EntitiesNotFound => {
                format!("/download/{}/entities/notfound/entities_not_found.csv", token)
            }
            Artifact::ResultJson => format!("/download/{}/result.json", token),
            Artifact::ReportPdf(species) => {
                format!("/report/{}/{}/report.pdf", token, species.url_segment())
            }
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Artifact::ReportPdf(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Artifact::Pathways(_) => "pathways",
            Artifact::EntitiesFound(_) => "entities found",
            Artifact::EntitiesNotFound => "entities not found",
            Artifact::ResultJson => "result json",
            Artifact::ReportPdf(_) => "pdf report",
        }
    }
}
