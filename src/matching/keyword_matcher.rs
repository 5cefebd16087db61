//! Keyword overlap scoring between a job description and a resume

use crate::llm::analyzer::KeywordAnalysis;
use crate::matching::text::TextProcessor;
use std::collections::HashSet;
use strsim::jaro_winkler;

/// Matches job-description keywords against resume tokens, exactly first and
/// fuzzily second. Fills the same analysis contract the hosted LLM returns.
pub struct KeywordMatcher {
    processor: TextProcessor,
    fuzzy_threshold: f64,
    max_keywords: usize,
}

impl KeywordMatcher {
    pub fn new(fuzzy_threshold: f64, max_keywords: usize) -> Self {
        Self {
            processor: TextProcessor::new(),
            fuzzy_threshold: fuzzy_threshold.clamp(0.0, 1.0),
            max_keywords,
        }
    }

    /// Analyze keyword overlap. Score is the percentage of job keywords found
    /// in the resume (0 when the job description yields no keywords).
    pub fn analyze(&self, job_text: &str, resume_text: &str) -> KeywordAnalysis {
        let job_keywords = self.processor.extract_keywords(job_text, self.max_keywords);

        let resume_tokens: HashSet<String> =
            self.processor.tokenize(resume_text).into_iter().collect();

        let mut matched_keywords = Vec::new();
        let mut missing_keywords = Vec::new();

        for keyword in &job_keywords {
            if self.is_present(keyword, &resume_tokens) {
                matched_keywords.push(keyword.clone());
            } else {
                missing_keywords.push(keyword.clone());
            }
        }

        let score = if job_keywords.is_empty() {
            0
        } else {
            ((matched_keywords.len() as f64 / job_keywords.len() as f64) * 100.0).round() as u8
        };

        KeywordAnalysis {
            job_keywords,
            missing_keywords,
            matched_keywords,
            score,
        }
    }

    /// Jaccard token-overlap similarity, reported alongside the keyword score.
    pub fn similarity(&self, job_text: &str, resume_text: &str) -> f32 {
        self.processor.text_similarity(job_text, resume_text)
    }

    fn is_present(&self, keyword: &str, resume_tokens: &HashSet<String>) -> bool {
        if resume_tokens.contains(keyword) {
            return true;
        }

        resume_tokens
            .iter()
            .any(|token| jaro_winkler(token, keyword) >= self.fuzzy_threshold)
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new(0.9, 20)
    }
}
