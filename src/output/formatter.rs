//! Report formatters for console, JSON, Markdown and HTML output

use crate::config::OutputFormat;
use crate::error::{Result, ResumeOptimizerError};
use crate::output::report::AnalysisReport;
use askama::Template;
use colored::{Color, Colorize};

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and keyword highlighting
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and sharing
pub struct MarkdownFormatter;

/// HTML formatter with inline styling
pub struct HtmlFormatter;

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Resume Keyword Analysis</title>
<style>
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; color: #333; }
.score { font-size: 2em; font-weight: bold; }
.keyword { display: inline-block; padding: 3px 10px; margin: 3px; border-radius: 12px; font-size: 0.9em; }
.matched { background: #d4edda; color: #155724; }
.missing { background: #f8d7da; color: #721c24; }
.meta { color: #6c757d; font-size: 0.85em; margin-top: 30px; }
</style>
</head>
<body>
<h1>Resume Keyword Analysis</h1>
<p class="score">Match Score: {{ score }}% ({{ score_label }})</p>
<p>{{ verdict }}</p>
<h2>Matched Keywords</h2>
<div>{{ matched_html|safe }}</div>
<h2>Missing Keywords</h2>
<div>{{ missing_html|safe }}</div>
<h2>Recommendations</h2>
<p>{{ recommendations }}</p>
<div class="meta">
<p>Resume: {{ resume_file }} | Job: {{ job_file }}</p>
<p>Generated {{ generated_at }} by resume-optimizer v{{ version }} ({{ source }})</p>
</div>
</body>
</html>"#,
    ext = "html"
)]
struct HtmlReportTemplate {
    score: u8,
    score_label: String,
    verdict: String,
    matched_html: String,
    missing_html: String,
    recommendations: String,
    resume_file: String,
    job_file: String,
    generated_at: String,
    version: String,
    source: String,
}

/// Advice shown whenever keywords are missing.
const RECOMMENDATION_TEXT: &str = "Consider adding the missing keywords to your resume to improve your chances of getting past ATS systems. Make sure to incorporate them naturally and honestly based on your actual skills and experience.";

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_badge(&self, report: &AnalysisReport) -> String {
        let label = report.score_label();
        let color = match report.analysis.score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", label.color(color).bold())
        } else {
            format!("[{}]", label)
        }
    }

    fn keyword_list(&self, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return "  (none)\n".to_string();
        }

        let mut out = String::new();
        for keyword in keywords {
            out.push_str(&format!("  • {}\n", self.colorize(keyword, color)));
        }
        out
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            self.colorize("RESUME KEYWORD ANALYSIS", Color::Blue)
        ));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n\n",
            report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&format!(
            "Match Score: {}% {}\n",
            report.analysis.score,
            self.score_badge(report)
        ));
        output.push_str(&format!("{}\n", report.verdict()));

        if let Some(similarity) = report.similarity {
            output.push_str(&format!(
                "Token overlap (Jaccard): {:.1}%\n",
                similarity * 100.0
            ));
        }

        output.push_str(&format!(
            "\nMatched Keywords ({}):\n",
            report.analysis.matched_keywords.len()
        ));
        output.push_str(&self.keyword_list(&report.analysis.matched_keywords, Color::Green));

        output.push_str(&format!(
            "\nMissing Keywords ({}):\n",
            report.analysis.missing_keywords.len()
        ));
        output.push_str(&self.keyword_list(&report.analysis.missing_keywords, Color::Red));

        if !report.analysis.missing_keywords.is_empty() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                self.colorize("Recommendations", Color::Yellow),
                RECOMMENDATION_TEXT
            ));
        }

        if self.detailed {
            output.push_str(&format!(
                "\nResume Structure ({} format):\n",
                report.structure.format_type
            ));
            for title in &report.structure.section_titles {
                output.push_str(&format!("  • {}\n", title));
            }
            output.push_str(&format!(
                "  Contact info: {} | Bullets: {}\n",
                report.structure.has_contact_info, report.structure.bullet_points
            ));
        }

        output.push_str(&format!(
            "\nAnalyzed with: {}\n",
            report.metadata.analysis_source
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Keyword Analysis\n\n");
        output.push_str(&format!(
            "**Match Score:** {}% ({})\n\n",
            report.analysis.score,
            report.score_label()
        ));
        output.push_str(&format!("{}\n\n", report.verdict()));

        output.push_str("## Matched Keywords\n\n");
        for keyword in &report.analysis.matched_keywords {
            output.push_str(&format!("- {}\n", keyword));
        }

        output.push_str("\n## Missing Keywords\n\n");
        if report.analysis.missing_keywords.is_empty() {
            output.push_str("_None: all job keywords are present._\n");
        } else {
            for keyword in &report.analysis.missing_keywords {
                output.push_str(&format!("- {}\n", keyword));
            }
            output.push_str(&format!("\n## Recommendations\n\n{}\n", RECOMMENDATION_TEXT));
        }

        output.push_str(&format!(
            "\n---\n*Resume: {} | Job: {} | Generated {} by resume-optimizer v{} ({})*\n",
            report.metadata.resume_file,
            report.metadata.job_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.metadata.version,
            report.metadata.analysis_source
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    fn keyword_spans(keywords: &[String], class: &str) -> String {
        if keywords.is_empty() {
            return "<p>(none)</p>".to_string();
        }

        keywords
            .iter()
            .map(|k| format!(r#"<span class="keyword {}">{}</span>"#, class, escape_html(k)))
            .collect::<Vec<_>>()
            .join("")
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template = HtmlReportTemplate {
            score: report.analysis.score,
            score_label: report.score_label().to_string(),
            verdict: report.verdict(),
            matched_html: Self::keyword_spans(&report.analysis.matched_keywords, "matched"),
            missing_html: Self::keyword_spans(&report.analysis.missing_keywords, "missing"),
            recommendations: if report.analysis.missing_keywords.is_empty() {
                "Your resume already covers the job's keywords.".to_string()
            } else {
                RECOMMENDATION_TEXT.to_string()
            },
            resume_file: report.metadata.resume_file.clone(),
            job_file: report.metadata.job_file.clone(),
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
            version: report.metadata.version.clone(),
            source: report.metadata.analysis_source.to_string(),
        };

        template
            .render()
            .map_err(|e| ResumeOptimizerError::OutputFormatting(format!("HTML render: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Coordinates the individual formatters.
pub struct ReportGenerator {
    use_colors: bool,
    detailed: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn format(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.use_colors, self.detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
            OutputFormat::Html => HtmlFormatter.format_report(report),
        }
    }
}
