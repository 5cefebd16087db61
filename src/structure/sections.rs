//! Section categories and the shared pattern table
//!
//! One fixed table maps each section category to its case-insensitive matching
//! keywords. The analyzer consumes it to set presence flags, the template
//! engine to locate sections by title, so the two can never drift apart.

use serde::{Deserialize, Serialize};

/// Recognized resume section categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionCategory {
    Summary,
    Experience,
    Education,
    Skills,
    Contact,
}

impl SectionCategory {
    pub const ALL: [SectionCategory; 5] = [
        SectionCategory::Summary,
        SectionCategory::Experience,
        SectionCategory::Education,
        SectionCategory::Skills,
        SectionCategory::Contact,
    ];

    /// Keywords matched case-insensitively as substrings of a header line.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            SectionCategory::Summary => &["SUMMARY", "PROFILE", "OBJECTIVE"],
            SectionCategory::Experience => &["EXPERIENCE", "WORK", "EMPLOYMENT", "HISTORY"],
            SectionCategory::Education => &["EDUCATION", "ACADEMIC"],
            SectionCategory::Skills => &["SKILLS", "EXPERTISE", "TECHNOLOGIES", "COMPETENCIES"],
            SectionCategory::Contact => &["CONTACT", "INFO", "ADDRESS", "PHONE", "EMAIL"],
        }
    }

    /// Case-insensitive substring test against a section title or header line.
    pub fn matches(&self, title: &str) -> bool {
        let upper = title.to_uppercase();
        self.keywords().iter().any(|kw| upper.contains(kw))
    }
}

impl std::fmt::Display for SectionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionCategory::Summary => write!(f, "Summary"),
            SectionCategory::Experience => write!(f, "Experience"),
            SectionCategory::Education => write!(f, "Education"),
            SectionCategory::Skills => write!(f, "Skills"),
            SectionCategory::Contact => write!(f, "Contact"),
        }
    }
}

/// Fixed vocabulary of section names recognized as headers when anchored at
/// the start of a line, regardless of capitalization.
pub const HEADER_VOCABULARY: [&str; 11] = [
    "EDUCATION",
    "EXPERIENCE",
    "SKILLS",
    "WORK HISTORY",
    "SUMMARY",
    "OBJECTIVE",
    "PROJECTS",
    "CERTIFICATIONS",
    "LANGUAGES",
    "INTERESTS",
    "REFERENCES",
];

/// True if the trimmed line starts with one of the known section names.
pub fn starts_with_known_section(line: &str) -> bool {
    let upper = line.to_uppercase();
    HEADER_VOCABULARY.iter().any(|name| upper.starts_with(name))
}

/// Pattern literals shared by the analyzer (inline contact detection) and the
/// template engine (field extraction). Compiled once per engine instance.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
pub const PHONE_PATTERN: &str = r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b";
pub const NAME_PATTERN: &str = r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_matching_is_case_insensitive() {
        assert!(SectionCategory::Education.matches("Education"));
        assert!(SectionCategory::Education.matches("ACADEMIC BACKGROUND"));
        assert!(SectionCategory::Experience.matches("Work History"));
        assert!(SectionCategory::Skills.matches("Core Competencies"));
        assert!(SectionCategory::Summary.matches("Professional Profile"));
        assert!(!SectionCategory::Education.matches("SKILLS"));
    }

    #[test]
    fn test_one_title_can_match_multiple_categories() {
        // "WORK HISTORY" carries both experience keywords; a combined header
        // like "CONTACT INFO" matches contact twice but only counts once.
        assert!(SectionCategory::Experience.matches("WORK HISTORY"));
        assert!(SectionCategory::Contact.matches("CONTACT INFO"));
    }

    #[test]
    fn test_known_section_prefix_anchor() {
        assert!(starts_with_known_section("EDUCATION"));
        assert!(starts_with_known_section("education and training"));
        assert!(starts_with_known_section("Work History:"));
        assert!(!starts_with_known_section("My education"));
    }
}
