//! CLI interface for the resume optimizer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-optimizer")]
#[command(about = "Resume keyword analysis, AI enhancement and template reformatting")]
#[command(
    long_about = "Check a resume against a job description for keyword coverage, rewrite it to close keyword gaps using a hosted LLM, and reformat it under a named template layout"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze keyword overlap between a resume and a job description
    Analyze {
        /// Path to resume file (TXT, MD, PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Skip the hosted API and match keywords locally
        #[arg(long)]
        offline: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the report to a file instead of printing it
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include resume structure details in the report
        #[arg(short, long)]
        detailed: bool,
    },

    /// Rewrite the resume to close keyword gaps (requires an API key)
    Enhance {
        /// Path to resume file (TXT, MD, PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Save the enhanced resume (.docx for a word-processor document,
        /// anything else for plain text)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Reformat the resume under a named template layout
    Reformat {
        /// Path to resume file (TXT, MD, PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Template: original, professional, modern, simple, academic
        #[arg(short, long, default_value = "professional")]
        template: String,

        /// Save the reformatted resume (.docx or plain text by extension)
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the structure detected in a resume
    Inspect {
        /// Path to resume file (TXT, MD, PDF, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Extensions accepted for resume inputs. `.doc` is accepted here so the
/// extractor can reject it with conversion guidance rather than a generic
/// invalid-extension message.
pub const RESUME_EXTENSIONS: [&str; 6] = ["txt", "md", "markdown", "pdf", "docx", "doc"];

/// Extensions accepted for job description inputs.
pub const JOB_EXTENSIONS: [&str; 3] = ["txt", "md", "markdown"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let path = PathBuf::from("resume.PDF");
        assert!(validate_file_extension(&path, &RESUME_EXTENSIONS).is_ok());

        let path = PathBuf::from("resume.odt");
        assert!(validate_file_extension(&path, &RESUME_EXTENSIONS).is_err());

        let path = PathBuf::from("noextension");
        assert!(validate_file_extension(&path, &RESUME_EXTENSIONS).is_err());
    }
}
