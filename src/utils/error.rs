use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReactomeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parse error: {message}")]
    ParseError { message: String },

    #[error("{operation} failed: {status} - {body}")]
    ServiceError {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Token not found in the response")]
    TokenNotFound,

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Unknown tissue: {0}")]
    UnknownTissue(String),

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReactomeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReactomeError::ApiError(_) => ErrorCategory::Network,
            ReactomeError::ServiceError { .. } | ReactomeError::TokenNotFound => {
                ErrorCategory::Service
            }
            ReactomeError::CsvError(_) | ReactomeError::ParseError { .. } => ErrorCategory::Data,
            ReactomeError::UnknownSpecies(_)
            | ReactomeError::UnknownTissue(_)
            | ReactomeError::ConfigValidationError { .. }
            | ReactomeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReactomeError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ReactomeError::ApiError(e) if e.is_timeout() || e.is_connect() => {
                ErrorSeverity::Medium
            }
            ReactomeError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error; severity decides it.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReactomeError::ApiError(_) => {
                "Check the network connection and the --reactome_url value, then retry"
            }
            ReactomeError::ServiceError { status, .. } if *status == 404 => {
                "The analysis token may have expired; run the analysis again"
            }
            ReactomeError::ServiceError { .. } => {
                "Inspect the service response above; the input identifiers may be invalid"
            }
            ReactomeError::TokenNotFound => {
                "The service did not return an analysis token; check that the input is not empty"
            }
            ReactomeError::CsvError(_) | ReactomeError::ParseError { .. } => {
                "The downloaded CSV is malformed; try downloading it again"
            }
            ReactomeError::UnknownSpecies(_) => {
                "Use a scientific name (e.g. 'Mus musculus') or a short name (e.g. 'mouse')"
            }
            ReactomeError::UnknownTissue(_) => {
                "Use a tissue display name such as 'Liver' or 'Bone Marrow'"
            }
            ReactomeError::ConfigValidationError { .. }
            | ReactomeError::InvalidConfigValueError { .. } => {
                "Review the command line options and the configuration file"
            }
            ReactomeError::IoError(_) => "Check that the paths exist and are writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the Reactome service: {}", self),
            ErrorCategory::Service => format!("The Reactome service rejected the request: {}", self),
            ErrorCategory::Data => format!("Could not read the analysis result: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("File system error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReactomeError>;
