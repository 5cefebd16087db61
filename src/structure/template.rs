//! Template reformatting
//!
//! Reassembles a resume's recognized sections under a named fixed layout.
//! Each call re-derives the structure from the input text; nothing is cached
//! between analyzer and template engine. Missing fields degrade to
//! placeholders, missing sections are omitted, and the engine never fails.

use crate::structure::analyzer::{ResumeStructure, StructureAnalyzer};
use crate::structure::sections::{SectionCategory, EMAIL_PATTERN, NAME_PATTERN, PHONE_PATTERN};
use regex::Regex;
use serde::{Deserialize, Serialize};

const NAME_PLACEHOLDER: &str = "YOUR NAME";
const EMAIL_PLACEHOLDER: &str = "email@example.com";
const PHONE_PLACEHOLDER: &str = "(123) 456-7890";
const SUMMARY_PLACEHOLDER: &str = "Experienced professional with a track record of success...";

/// Named layouts a resume can be reassembled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Original,
    Professional,
    Modern,
    Simple,
    Academic,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Original,
        Template::Professional,
        Template::Modern,
        Template::Simple,
        Template::Academic,
    ];

    /// Resolve a template by name. Any unrecognized name behaves as
    /// `original`: the text passes through unchanged.
    pub fn from_name(name: &str) -> Template {
        match name.to_lowercase().as_str() {
            "professional" => Template::Professional,
            "modern" => Template::Modern,
            "simple" => Template::Simple,
            "academic" => Template::Academic,
            _ => Template::Original,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Original => "original",
            Template::Professional => "professional",
            Template::Modern => "modern",
            Template::Simple => "simple",
            Template::Academic => "academic",
        }
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Contact fields pulled out of the raw text, placeholders filled in.
struct ContactDetails {
    name: String,
    email: String,
    phone: String,
}

/// Template engine holding the compiled extraction patterns.
pub struct TemplateEngine {
    analyzer: StructureAnalyzer,
    name_regex: Regex,
    email_regex: Regex,
    phone_regex: Regex,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let name_regex = Regex::new(NAME_PATTERN).expect("Invalid name regex");
        let email_regex = Regex::new(EMAIL_PATTERN).expect("Invalid email regex");
        let phone_regex = Regex::new(PHONE_PATTERN).expect("Invalid phone regex");

        Self {
            analyzer: StructureAnalyzer::new(),
            name_regex,
            email_regex,
            phone_regex,
        }
    }

    /// Re-emit the resume under the given template. `Original` (and therefore
    /// any unrecognized name) returns the input unchanged.
    pub fn apply(&self, resume_text: &str, template: Template) -> String {
        let structure = self.analyzer.analyze(resume_text);

        match template {
            Template::Original => resume_text.to_string(),
            Template::Professional => self.professional(resume_text, &structure),
            Template::Modern => self.modern(resume_text, &structure),
            Template::Simple => self.simple(resume_text, &structure),
            Template::Academic => self.academic(resume_text, &structure),
        }
    }

    fn extract_contact(&self, resume_text: &str) -> ContactDetails {
        let name = self
            .name_regex
            .find(resume_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());

        let email = self
            .email_regex
            .find(resume_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| EMAIL_PLACEHOLDER.to_string());

        let phone = self
            .phone_regex
            .find(resume_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| PHONE_PLACEHOLDER.to_string());

        ContactDetails { name, email, phone }
    }

    /// Classic layout: contact block, then summary / experience / education /
    /// skills under conventional headings. Summary falls back to a placeholder
    /// sentence; the other sections are omitted when absent.
    fn professional(&self, resume_text: &str, structure: &ResumeStructure) -> String {
        let contact = self.extract_contact(resume_text);

        let summary = structure
            .find_section(SectionCategory::Summary)
            .map(|s| s.content.as_str())
            .unwrap_or(SUMMARY_PLACEHOLDER);

        let mut output = format!(
            "{}\n{} | {}\n\nPROFESSIONAL SUMMARY\n{}\n\n",
            contact.name, contact.email, contact.phone, summary
        );

        if let Some(experience) = structure.find_section(SectionCategory::Experience) {
            output.push_str(&format!("PROFESSIONAL EXPERIENCE\n{}\n\n", experience.content));
        }

        if let Some(education) = structure.find_section(SectionCategory::Education) {
            output.push_str(&format!("EDUCATION\n{}\n\n", education.content));
        }

        if let Some(skills) = structure.find_section(SectionCategory::Skills) {
            output.push_str(&format!("SKILLS\n{}", skills.content));
        }

        output
    }

    /// Lowercase wordmark, ruled headings, skills promoted above experience.
    fn modern(&self, resume_text: &str, structure: &ResumeStructure) -> String {
        let contact = self.extract_contact(resume_text);
        let rule = "─".repeat(32);

        let mut output = format!(
            "{}\n{}\n{} · {}\n",
            contact.name.to_lowercase(),
            rule,
            contact.email,
            contact.phone
        );

        let order = [
            (SectionCategory::Summary, "summary"),
            (SectionCategory::Skills, "skills"),
            (SectionCategory::Experience, "experience"),
            (SectionCategory::Education, "education"),
        ];

        for (category, heading) in order {
            if let Some(section) = structure.find_section(category) {
                output.push_str(&format!("\n── {}\n{}\n", heading, section.content));
            }
        }

        output
    }

    /// Minimal layout: plain title-case `Heading:` lines, no decoration.
    fn simple(&self, resume_text: &str, structure: &ResumeStructure) -> String {
        let contact = self.extract_contact(resume_text);

        let mut output = format!("{}\n{} | {}\n", contact.name, contact.email, contact.phone);

        let order = [
            (SectionCategory::Summary, "Summary"),
            (SectionCategory::Experience, "Experience"),
            (SectionCategory::Education, "Education"),
            (SectionCategory::Skills, "Skills"),
        ];

        for (category, heading) in order {
            if let Some(section) = structure.find_section(category) {
                output.push_str(&format!("\n{}:\n{}\n", heading, section.content));
            }
        }

        output
    }

    /// CV layout: education leads, experience is framed as research history.
    fn academic(&self, resume_text: &str, structure: &ResumeStructure) -> String {
        let contact = self.extract_contact(resume_text);

        let mut output = format!(
            "CURRICULUM VITAE\n\n{}\n{} | {}\n",
            contact.name, contact.email, contact.phone
        );

        let order = [
            (SectionCategory::Education, "EDUCATION"),
            (
                SectionCategory::Experience,
                "RESEARCH AND PROFESSIONAL EXPERIENCE",
            ),
            (SectionCategory::Skills, "SKILLS"),
        ];

        for (category, heading) in order {
            if let Some(section) = structure.find_section(category) {
                output.push_str(&format!("\n{}\n{}\n", heading, section.content));
            }
        }

        output
    }
}

/// Apply a template by name with a freshly constructed engine.
pub fn apply_template(resume_text: &str, template_name: &str) -> String {
    TemplateEngine::new().apply(resume_text, Template::from_name(template_name))
}
