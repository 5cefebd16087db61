//! Text extraction from various file formats

use crate::error::{Result, ResumeOptimizerError};
use pulldown_cmark::{html, Parser};
use std::io::Read;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeOptimizerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeOptimizerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeOptimizerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ResumeOptimizerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        let text = html_output
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        Ok(strip_tags(&text))
    }
}

/// Extractor for OOXML word-processor documents. The .docx container is a
/// zip archive; the document body lives in `word/document.xml`.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeOptimizerError::Io)?;

        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).map_err(|e| {
            ResumeOptimizerError::DocxExtraction(format!(
                "'{}' is not a readable .docx archive: {}",
                path.display(),
                e
            ))
        })?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| {
                ResumeOptimizerError::DocxExtraction(format!(
                    "'{}' has no document body: {}",
                    path.display(),
                    e
                ))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| {
                ResumeOptimizerError::DocxExtraction(format!(
                    "Failed to read document body from '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(docx_xml_to_text(&xml))
    }
}

/// Convert the WordprocessingML body to plain text: paragraph ends and breaks
/// become newlines, tab marks become tabs, remaining markup is stripped.
fn docx_xml_to_text(xml: &str) -> String {
    let text = xml
        .replace("</w:p>", "\n")
        .replace("<w:br/>", "\n")
        .replace("<w:br />", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:tab />", "\t")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    strip_tags(&text)
}

/// Remove remaining markup tags and normalize to trimmed, non-empty lines.
fn strip_tags(text: &str) -> String {
    let re = regex::Regex::new(r"<[^>]*>").unwrap();
    let clean_text = re.replace_all(text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docx_xml_to_text_paragraphs() {
        let xml = r#"<w:document><w:body><w:p><w:r><w:t>EXPERIENCE</w:t></w:r></w:p><w:p><w:r><w:t>Built things</w:t></w:r></w:p></w:body></w:document>"#;

        let text = docx_xml_to_text(xml);
        assert_eq!(text, "EXPERIENCE\nBuilt things");
    }

    #[test]
    fn test_docx_xml_entities_decoded() {
        let xml = "<w:p><w:r><w:t>R&amp;D engineer</w:t></w:r></w:p>";
        assert_eq!(docx_xml_to_text(xml), "R&D engineer");
    }

    #[test]
    fn test_strip_tags_drops_blank_lines() {
        let text = "<p>one</p>\n\n   \n<p>two</p>";
        assert_eq!(strip_tags(text), "one\ntwo");
    }
}
