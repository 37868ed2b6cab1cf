pub mod cli;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{CliConfig, Command, OutputArgs};

#[cfg(feature = "cli")]
mod args {
    use crate::core::analysis::{read_text, OutputOptions};
    use crate::core::Storage;
    use crate::domain::catalog::{ResourceType, SpeciesName, TissueName};
    use crate::domain::model::AnalysisRequest;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_existing_file, validate_non_empty_string, validate_path, Validate,
    };
    use clap::{ArgAction, Args, Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "reactome-cli", version)]
    #[command(about = "Run Reactome pathway analyses and download their results")]
    pub struct CliConfig {
        /// URL of the Reactome server, e.g. https://reactome.org
        #[arg(short = 'u', long = "reactome_url", global = true)]
        pub reactome_url: Option<String>,

        /// TOML file with [service] settings
        #[arg(short, long, global = true)]
        pub config: Option<PathBuf>,

        /// HTTP timeout for every request
        #[arg(long = "timeout_seconds", global = true)]
        pub timeout_seconds: Option<u64>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long = "json_logs", global = true, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Analyse a file of gene, protein or compound identifiers
        Genes {
            /// Input file containing one identifier per line
            #[arg(short = 'i', long = "identifiers_file")]
            identifiers_file: PathBuf,

            /// Convert all non-human identifiers to their human equivalents
            #[arg(long = "project_to_human", default_value_t = true, action = ArgAction::Set)]
            project_to_human: bool,

            /// Use IntAct interactors to increase the analysis background
            #[arg(long = "include_interactors", default_value_t = false, action = ArgAction::Set)]
            include_interactors: bool,

            #[command(flatten)]
            outputs: OutputArgs,
        },

        /// Compare a species against Homo sapiens
        Species {
            /// Scientific or short name, e.g. "Mus musculus" or "mouse"
            species: SpeciesName,

            #[command(flatten)]
            outputs: OutputArgs,
        },

        /// Analyse the genes expressed in one or more tissues
        Tissues {
            /// Comma separated tissue names, e.g. "Liver,Bone Marrow"
            #[arg(value_delimiter = ',', required = true)]
            tissues: Vec<TissueName>,

            #[command(flatten)]
            outputs: OutputArgs,
        },

        /// Render an HTML report from a pathways CSV that was already downloaded
        Render {
            #[arg(long = "pathways_csv")]
            pathways_csv: PathBuf,

            /// Token of the analysis the CSV belongs to
            #[arg(long)]
            token: String,

            #[arg(long = "html_report")]
            html_report: PathBuf,
        },
    }

    #[derive(Debug, Clone, Args)]
    pub struct OutputArgs {
        /// Pathways output csv file
        #[arg(long)]
        pub pathways: Option<PathBuf>,

        /// Entities found output csv file
        #[arg(long = "entities_found")]
        pub entities_found: Option<PathBuf>,

        /// Entities not found output csv file
        #[arg(long = "entities_not_found")]
        pub entities_not_found: Option<PathBuf>,

        /// Complete analysis results json file
        #[arg(long = "result_json")]
        pub result_json: Option<PathBuf>,

        /// Report pdf output file
        #[arg(long = "report_pdf")]
        pub report_pdf: Option<PathBuf>,

        /// HTML report output file
        #[arg(long = "html_report")]
        pub html_report: Option<PathBuf>,

        /// Identifier resource for the pathways and entities found files
        #[arg(long, value_enum, ignore_case = true, default_value_t = ResourceType::Total)]
        pub resource: ResourceType,

        /// Species the pdf report is drawn for
        #[arg(long = "report_species", default_value = "Homo sapiens")]
        pub report_species: SpeciesName,
    }

    impl OutputArgs {
        pub fn to_options(&self) -> OutputOptions {
            OutputOptions {
                pathways_file: self.pathways.clone(),
                entities_found_file: self.entities_found.clone(),
                entities_not_found_file: self.entities_not_found.clone(),
                result_json_file: self.result_json.clone(),
                report_pdf_file: self.report_pdf.clone(),
                html_report_file: self.html_report.clone(),
                resource: self.resource,
                report_species: self.report_species,
            }
        }
    }

    impl Command {
        pub fn outputs(&self) -> Option<&OutputArgs> {
            match self {
                Command::Genes { outputs, .. }
                | Command::Species { outputs, .. }
                | Command::Tissues { outputs, .. } => Some(outputs),
                Command::Render { .. } => None,
            }
        }

        /// The analysis to submit; `None` for offline commands. Identifier
        /// files are read through `storage`.
        pub async fn analysis_request<S: Storage>(
            &self,
            storage: &S,
        ) -> Result<Option<AnalysisRequest>> {
            let request = match self {
                Command::Genes {
                    identifiers_file,
                    project_to_human,
                    include_interactors,
                    ..
                } => AnalysisRequest::Genes {
                    identifiers: read_text(storage, identifiers_file).await?,
                    project_to_human: *project_to_human,
                    include_interactors: *include_interactors,
                },
                Command::Species { species, .. } => AnalysisRequest::Species(*species),
                Command::Tissues { tissues, .. } => AnalysisRequest::Tissues(tissues.clone()),
                Command::Render { .. } => return Ok(None),
            };
            Ok(Some(request))
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(config) = &self.config {
                validate_existing_file("config", config)?;
            }

            match &self.command {
                Command::Genes {
                    identifiers_file, ..
                } => validate_existing_file("identifiers_file", identifiers_file)?,
                Command::Render {
                    pathways_csv,
                    token,
                    html_report,
                } => {
                    validate_existing_file("pathways_csv", pathways_csv)?;
                    validate_non_empty_string("token", token)?;
                    validate_path("html_report", html_report)?;
                }
                Command::Species { .. } | Command::Tissues { .. } => {}
            }

            if let Some(outputs) = self.command.outputs() {
                for (name, path) in outputs.to_options().requested_paths() {
                    validate_path(name, path)?;
                }
            }

            Ok(())
        }
    }

}
