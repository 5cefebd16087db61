//! Error handling for the resume optimizer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeOptimizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error(".doc files are not directly supported ({0}). Please convert to .docx or .pdf and try again.")]
    LegacyDocFormat(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("API response could not be parsed: {0}")]
    MalformedResponse(String),

    #[error("Missing API key: set api.api_key in the config file or the OPENAI_API_KEY environment variable")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, ResumeOptimizerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeOptimizerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeOptimizerError::TextProcessing(err.to_string())
    }
}

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for ResumeOptimizerError {
    fn from(err: reqwest::Error) -> Self {
        ResumeOptimizerError::Network(err.to_string())
    }
}
