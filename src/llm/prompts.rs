//! Prompt templates for keyword analysis and resume enhancement

/// System role shared by both analysis calls.
pub const SYSTEM_PROMPT: &str = "You are an expert ATS system and resume analyzer. Extract key skills and requirements from job descriptions and compare them against resumes.";

/// Prompt templates with `{placeholder}` substitution.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub keyword_analysis: String,
    pub enhancement: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            keyword_analysis: KEYWORD_ANALYSIS_TEMPLATE.to_string(),
            enhancement: ENHANCEMENT_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone)]
pub struct PromptParams {
    pub job_content: String,
    pub resume_content: String,
}

impl PromptTemplates {
    pub fn render_keyword_analysis(&self, params: &PromptParams) -> String {
        self.keyword_analysis
            .replace("{job}", &params.job_content)
            .replace("{resume}", &params.resume_content)
    }

    pub fn render_enhancement(&self, params: &PromptParams, missing_keywords: &[String]) -> String {
        self.enhancement
            .replace("{keywords}", &missing_keywords.join(", "))
            .replace("{job}", &params.job_content)
            .replace("{resume}", &params.resume_content)
    }
}

const KEYWORD_ANALYSIS_TEMPLATE: &str = r#"Analyze this job description and resume. Extract important keywords from the job description, and tell me which ones are missing from the resume. Format your response as a JSON object with these properties: "jobKeywords" (array of strings), "missingKeywords" (array of strings), "matchedKeywords" (array of strings), and "score" (number from 0-100 representing match percentage).

Job Description:
{job}

Resume:
{resume}"#;

const ENHANCEMENT_TEMPLATE: &str = r#"Rewrite this resume to naturally incorporate the missing keywords listed below, but only where they are truthful to the candidate's actual experience. Keep the original structure and tone. Do not invent employers, titles, dates, or qualifications. Format your response as a JSON object with these properties: "enhancedText" (string, the complete rewritten resume) and "changes" (array of strings, one short description per change made).

Missing Keywords:
{keywords}

Job Description:
{job}

Resume:
{resume}"#;
