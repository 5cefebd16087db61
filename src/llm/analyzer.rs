//! Typed keyword-analysis and enhancement calls against the hosted API

use crate::config::Config;
use crate::error::{Result, ResumeOptimizerError};
use crate::llm::client::ApiClient;
use crate::llm::prompts::{PromptParams, PromptTemplates, SYSTEM_PROMPT};
use serde::{Deserialize, Deserializer, Serialize};

/// Keyword-match result. Field names follow the wire contract (camelCase
/// JSON), shared by the hosted path and the offline matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub job_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    /// Match percentage, 0..=100. Out-of-range or fractional values from the
    /// model are clamped rather than rejected.
    #[serde(deserialize_with = "clamp_score")]
    pub score: u8,
}

/// Enhanced-resume result returned by the rewrite call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedResume {
    pub enhanced_text: String,
    #[serde(default)]
    pub changes: Vec<String>,
}

fn clamp_score<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

/// Analyzer composing the HTTP client with the prompt templates.
pub struct LlmAnalyzer {
    client: ApiClient,
    templates: PromptTemplates,
}

impl LlmAnalyzer {
    /// Build an analyzer from config. The API key comes from the config file
    /// or, preferentially, the `OPENAI_API_KEY` environment variable.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| config.api.api_key.clone())
            .ok_or(ResumeOptimizerError::MissingApiKey)?;

        let client = ApiClient::new(&config.api, api_key)?;

        Ok(Self {
            client,
            templates: PromptTemplates::default(),
        })
    }

    /// Compute keyword overlap between a job description and a resume.
    pub async fn analyze_keywords(
        &self,
        job_text: &str,
        resume_text: &str,
    ) -> Result<KeywordAnalysis> {
        let params = PromptParams {
            job_content: job_text.to_string(),
            resume_content: resume_text.to_string(),
        };

        let prompt = self.templates.render_keyword_analysis(&params);
        self.client.call_json(SYSTEM_PROMPT, &prompt).await
    }

    /// Rewrite the resume to close keyword gaps.
    pub async fn enhance_resume(
        &self,
        job_text: &str,
        resume_text: &str,
        missing_keywords: &[String],
    ) -> Result<EnhancedResume> {
        let params = PromptParams {
            job_content: job_text.to_string(),
            resume_content: resume_text.to_string(),
        };

        let prompt = self.templates.render_enhancement(&params, missing_keywords);
        self.client.call_json(SYSTEM_PROMPT, &prompt).await
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_analysis_wire_format() {
        let json = r#"{
            "jobKeywords": ["rust", "grpc"],
            "missingKeywords": ["grpc"],
            "matchedKeywords": ["rust"],
            "score": 50
        }"#;

        let analysis: KeywordAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.job_keywords, vec!["rust", "grpc"]);
        assert_eq!(analysis.missing_keywords, vec!["grpc"]);
        assert_eq!(analysis.score, 50);
    }

    #[test]
    fn test_score_clamping() {
        let json = r#"{"jobKeywords":[],"missingKeywords":[],"matchedKeywords":[],"score":140}"#;
        let analysis: KeywordAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.score, 100);

        let json = r#"{"jobKeywords":[],"missingKeywords":[],"matchedKeywords":[],"score":87.6}"#;
        let analysis: KeywordAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.score, 88);
    }

    #[test]
    fn test_enhanced_resume_changes_default_empty() {
        let json = r#"{"enhancedText": "better resume"}"#;
        let enhanced: EnhancedResume = serde_json::from_str(json).unwrap();
        assert_eq!(enhanced.enhanced_text, "better resume");
        assert!(enhanced.changes.is_empty());
    }

    #[test]
    fn test_keyword_analysis_round_trips_camel_case() {
        let analysis = KeywordAnalysis {
            job_keywords: vec!["rust".to_string()],
            missing_keywords: vec![],
            matched_keywords: vec!["rust".to_string()],
            score: 100,
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("jobKeywords").is_some());
        assert!(json.get("matchedKeywords").is_some());
        assert!(json.get("job_keywords").is_none());
    }
}
