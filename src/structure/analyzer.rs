//! Heuristic resume structure analysis
//!
//! Segments raw extracted text into titled sections and derives layout
//! signals (bullets, contact info, format family). The header heuristic is
//! deliberately loose: any short all-caps line is treated as a section title,
//! acronym false positives included. Downstream code relies on that exact
//! behavior, so it must not be tightened.

use crate::structure::sections::{
    starts_with_known_section, SectionCategory, EMAIL_PATTERN, PHONE_PATTERN,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A contiguous run of resume text introduced by a detected header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Coarse classification of a resume's visual layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Standard,
    Narrative,
    Tabular,
    Unknown,
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Standard => write!(f, "standard"),
            FormatType::Narrative => write!(f, "narrative"),
            FormatType::Tabular => write!(f, "tabular"),
            FormatType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Derived view of a resume's structure. Recomputed from the text on every
/// analysis call; never cached or mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStructure {
    pub sections: Vec<Section>,
    pub has_contact_info: bool,
    pub has_summary: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    pub bullet_points: bool,
    pub format_type: FormatType,
}

impl ResumeStructure {
    /// Locate the first section whose title matches the category, if any.
    pub fn find_section(&self, category: SectionCategory) -> Option<&Section> {
        self.sections.iter().find(|s| category.matches(&s.title))
    }
}

/// Analyzer holding the compiled contact patterns.
pub struct StructureAnalyzer {
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for StructureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Running scan state: the pending header and its accumulated content lines.
#[derive(Default)]
struct Scan {
    sections: Vec<Section>,
    current_title: Option<String>,
    buffer: Vec<String>,
    has_contact_info: bool,
    has_summary: bool,
    has_education: bool,
    has_experience: bool,
    has_skills: bool,
    bullet_points: bool,
}

impl Scan {
    /// Flush the in-progress section. A header with no accumulated content
    /// produces no section record; preamble lines before the first header are
    /// discarded the same way.
    fn flush(&mut self) {
        if let Some(title) = self.current_title.take() {
            if !self.buffer.is_empty() {
                self.sections.push(Section {
                    title,
                    content: self.buffer.join("\n"),
                });
            }
        }
        self.buffer.clear();
    }

    fn mark_category(&mut self, category: SectionCategory) {
        match category {
            SectionCategory::Summary => self.has_summary = true,
            SectionCategory::Experience => self.has_experience = true,
            SectionCategory::Education => self.has_education = true,
            SectionCategory::Skills => self.has_skills = true,
            SectionCategory::Contact => self.has_contact_info = true,
        }
    }
}

impl StructureAnalyzer {
    pub fn new() -> Self {
        let email_regex = Regex::new(EMAIL_PATTERN).expect("Invalid email regex");
        let phone_regex = Regex::new(PHONE_PATTERN).expect("Invalid phone regex");

        Self {
            email_regex,
            phone_regex,
        }
    }

    /// Analyze raw resume text. Deterministic and total: unrecognizable input
    /// yields an all-default structure rather than an error.
    pub fn analyze(&self, text: &str) -> ResumeStructure {
        let mut scan = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .fold(Scan::default(), |mut scan, line| {
                if is_header_line(line) {
                    scan.flush();
                    scan.current_title = Some(line.to_string());
                    // Independent tests: one header may set several flags.
                    for category in SectionCategory::ALL {
                        if category.matches(line) {
                            scan.mark_category(category);
                        }
                    }
                } else {
                    scan.buffer.push(line.to_string());

                    if line.starts_with('•') || line.starts_with('-') || line.starts_with('*') {
                        scan.bullet_points = true;
                    }

                    if self.email_regex.is_match(line) || self.phone_regex.is_match(line) {
                        scan.has_contact_info = true;
                    }
                }
                scan
            });

        scan.flush();

        let format_type = classify_format(scan.bullet_points, scan.sections.len(), text);

        ResumeStructure {
            sections: scan.sections,
            has_contact_info: scan.has_contact_info,
            has_summary: scan.has_summary,
            has_education: scan.has_education,
            has_experience: scan.has_experience,
            has_skills: scan.has_skills,
            bullet_points: scan.bullet_points,
            format_type,
        }
    }
}

/// Header heuristic: a short all-caps line, or a line starting with a known
/// section name in any capitalization.
fn is_header_line(line: &str) -> bool {
    let length = line.chars().count();
    let all_caps = line == line.to_uppercase() && length > 3 && length < 30;

    all_caps || starts_with_known_section(line)
}

/// First matching rule wins; the order is part of the contract.
fn classify_format(bullet_points: bool, section_count: usize, raw_text: &str) -> FormatType {
    if bullet_points && section_count >= 3 {
        FormatType::Standard
    } else if section_count <= 2 && raw_text.chars().count() > 200 {
        FormatType::Narrative
    } else if raw_text.contains("  ") || raw_text.contains('\t') {
        FormatType::Tabular
    } else {
        FormatType::Unknown
    }
}

/// Analyze resume text with a freshly constructed analyzer.
pub fn analyze_structure(text: &str) -> ResumeStructure {
    StructureAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
John Smith
john.smith@example.com | (555) 123-4567

SUMMARY
Seasoned backend engineer focused on distributed systems.

EXPERIENCE
• Built ingestion pipeline handling 2M events/day
• Led migration from monolith to services

EDUCATION
B.S. Computer Science, State University

SKILLS
• Rust, Python, PostgreSQL
";

    #[test]
    fn test_sections_partition_in_order() {
        let structure = analyze_structure(SAMPLE_RESUME);

        let titles: Vec<&str> = structure.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["SUMMARY", "EXPERIENCE", "EDUCATION", "SKILLS"]);
        assert!(structure.sections[1].content.contains("ingestion pipeline"));
    }

    #[test]
    fn test_flags_from_headers_and_inline_contact() {
        let structure = analyze_structure(SAMPLE_RESUME);

        assert!(structure.has_summary);
        assert!(structure.has_experience);
        assert!(structure.has_education);
        assert!(structure.has_skills);
        // No CONTACT header, but the email/phone line sets the flag.
        assert!(structure.has_contact_info);
        assert!(structure.bullet_points);
    }

    #[test]
    fn test_education_line_creates_section_and_flag() {
        let text = "EDUCATION\nB.A. History, Some College";
        let structure = analyze_structure(text);

        assert!(structure.has_education);
        assert_eq!(structure.sections.len(), 1);
        assert_eq!(structure.sections[0].title, "EDUCATION");
    }

    #[test]
    fn test_bullet_detection() {
        let structure = analyze_structure("intro line\n• did a thing");
        assert!(structure.bullet_points);
    }

    #[test]
    fn test_no_headers_yields_empty_sections() {
        let text = "just a short note about nothing in particular";
        let structure = analyze_structure(text);

        assert!(structure.sections.is_empty());
        assert!(!structure.has_education);
        assert!(!structure.has_experience);
        assert_eq!(structure.format_type, FormatType::Unknown);
    }

    #[test]
    fn test_header_without_content_produces_no_section() {
        let text = "SKILLS\nEDUCATION\nB.S. Physics";
        let structure = analyze_structure(text);

        // SKILLS flushes empty; only EDUCATION carries content.
        assert_eq!(structure.sections.len(), 1);
        assert_eq!(structure.sections[0].title, "EDUCATION");
        assert!(structure.has_skills);
        assert!(structure.has_education);
    }

    #[test]
    fn test_preamble_lines_never_form_a_section() {
        let text = "Jane Doe\nSome introduction line\nEXPERIENCE\nDid things";
        let structure = analyze_structure(text);

        assert_eq!(structure.sections.len(), 1);
        assert_eq!(structure.sections[0].title, "EXPERIENCE");
    }

    #[test]
    fn test_all_caps_acronym_is_a_header_by_design() {
        // Known false positive of the heuristic; pinned on purpose.
        let text = "NASA\nworked on rockets";
        let structure = analyze_structure(text);

        assert_eq!(structure.sections.len(), 1);
        assert_eq!(structure.sections[0].title, "NASA");
    }

    #[test]
    fn test_blank_lines_are_separators_only() {
        let text = "EXPERIENCE\n\n\nshipped software\n\n";
        let structure = analyze_structure(text);

        assert_eq!(structure.sections.len(), 1);
        assert_eq!(structure.sections[0].content, "shipped software");
    }

    #[test]
    fn test_format_standard_beats_tabular() {
        // Bulleted, three sections, and column-aligned whitespace: the
        // first-match-wins ordering must classify it standard.
        let text = "\
SUMMARY
• concise  \tsummary line

EXPERIENCE
• worked  somewhere

SKILLS
• Rust
";
        let structure = analyze_structure(text);
        assert!(structure.sections.len() >= 3);
        assert!(structure.bullet_points);
        assert_eq!(structure.format_type, FormatType::Standard);
    }

    #[test]
    fn test_format_narrative_for_long_prose() {
        let text = "I am a professional with a long story to tell. ".repeat(10);
        let structure = analyze_structure(&text);

        assert!(structure.sections.len() <= 2);
        assert_eq!(structure.format_type, FormatType::Narrative);
    }

    #[test]
    fn test_format_tabular_for_column_whitespace() {
        let text = "name  role\nalpha\tbeta";
        let structure = analyze_structure(text);
        assert_eq!(structure.format_type, FormatType::Tabular);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let first = analyze_structure(SAMPLE_RESUME);
        let second = analyze_structure(SAMPLE_RESUME);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let structure = analyze_structure("");

        assert!(structure.sections.is_empty());
        assert!(!structure.bullet_points);
        assert_eq!(structure.format_type, FormatType::Unknown);
    }
}
