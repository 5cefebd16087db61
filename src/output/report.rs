//! Analysis report structures

use crate::llm::analyzer::KeywordAnalysis;
use crate::structure::analyzer::{FormatType, ResumeStructure};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one analysis run produced, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: KeywordAnalysis,
    pub structure: StructureSummary,
    /// Jaccard token overlap; only computed by the offline matcher.
    pub similarity: Option<f32>,
    pub metadata: ReportMetadata,
}

/// Condensed view of the resume's derived structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSummary {
    pub format_type: FormatType,
    pub section_titles: Vec<String>,
    pub has_contact_info: bool,
    pub has_summary: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    pub bullet_points: bool,
}

impl StructureSummary {
    pub fn from_structure(structure: &ResumeStructure) -> Self {
        Self {
            format_type: structure.format_type,
            section_titles: structure
                .sections
                .iter()
                .map(|s| s.title.clone())
                .collect(),
            has_contact_info: structure.has_contact_info,
            has_summary: structure.has_summary,
            has_education: structure.has_education,
            has_experience: structure.has_experience,
            has_skills: structure.has_skills,
            bullet_points: structure.bullet_points,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub resume_file: String,
    pub job_file: String,
    pub analysis_source: AnalysisSource,
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisSource {
    Api { model: String },
    Offline,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisSource::Api { model } => write!(f, "{}", model),
            AnalysisSource::Offline => write!(f, "offline matcher"),
        }
    }
}

impl AnalysisReport {
    pub fn new(
        analysis: KeywordAnalysis,
        structure: &ResumeStructure,
        similarity: Option<f32>,
        metadata: ReportMetadata,
    ) -> Self {
        Self {
            analysis,
            structure: StructureSummary::from_structure(structure),
            similarity,
            metadata,
        }
    }

    pub fn score_label(&self) -> &'static str {
        match self.analysis.score {
            90..=100 => "EXCELLENT",
            80..=89 => "VERY GOOD",
            70..=79 => "GOOD",
            60..=69 => "FAIR",
            50..=59 => "BELOW AVG",
            _ => "POOR",
        }
    }

    pub fn verdict(&self) -> String {
        if self.analysis.missing_keywords.is_empty() {
            "Great job! Your resume contains all the important keywords.".to_string()
        } else {
            format!(
                "{} of {} job keywords found; {} missing.",
                self.analysis.matched_keywords.len(),
                self.analysis.job_keywords.len(),
                self.analysis.missing_keywords.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::analyzer::analyze_structure;

    fn sample_report(score: u8, missing: Vec<String>) -> AnalysisReport {
        let structure = analyze_structure("SKILLS\nRust");
        AnalysisReport::new(
            KeywordAnalysis {
                job_keywords: vec!["rust".to_string(), "sql".to_string()],
                matched_keywords: vec!["rust".to_string()],
                missing_keywords: missing,
                score,
            },
            &structure,
            None,
            ReportMetadata {
                resume_file: "resume.txt".to_string(),
                job_file: "job.txt".to_string(),
                analysis_source: AnalysisSource::Offline,
                generated_at: Utc::now(),
                processing_time_ms: 5,
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        )
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(sample_report(95, vec![]).score_label(), "EXCELLENT");
        assert_eq!(sample_report(72, vec![]).score_label(), "GOOD");
        assert_eq!(sample_report(10, vec![]).score_label(), "POOR");
    }

    #[test]
    fn test_verdict_mentions_missing_count() {
        let report = sample_report(50, vec!["sql".to_string()]);
        assert!(report.verdict().contains("1 missing"));

        let clean = sample_report(100, vec![]);
        assert!(clean.verdict().contains("Great job"));
    }

    #[test]
    fn test_structure_summary_mirrors_structure() {
        let structure = analyze_structure("SKILLS\nRust, SQL");
        let summary = StructureSummary::from_structure(&structure);

        assert_eq!(summary.section_titles, vec!["SKILLS"]);
        assert!(summary.has_skills);
        assert!(!summary.has_education);
    }
}
