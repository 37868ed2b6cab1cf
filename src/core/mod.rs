pub mod analysis;
pub mod client;
pub mod fields;
pub mod links;
pub mod report;
pub mod tabular;

pub use crate::domain::model::{AnalysisToken, Row, TabularData};
pub use crate::domain::ports::{AnalysisService, ConfigProvider, Storage};
pub use crate::utils::error::Result;
