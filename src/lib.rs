pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use config::settings::ServiceSettings;
pub use core::analysis::{AnalysisOutcome, AnalysisRunner, OutputOptions};
pub use core::client::ReactomeClient;
pub use core::report::{render, ReportGenerator};
pub use core::tabular::parse;
pub use domain::model::{AnalysisToken, TabularData};
pub use utils::error::{ReactomeError, Result};
