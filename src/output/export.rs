//! Resume export: plain text and word-processor (.docx) serialization

use crate::error::{Result, ResumeOptimizerError};
use std::io::Write;
use std::path::Path;

/// Write the final resume text to `path`. A `.docx` extension selects the
/// word-processor package format; anything else is written as plain text.
pub fn export_resume(text: &str, path: &Path) -> Result<()> {
    let is_docx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);

    if is_docx {
        export_docx(text, path)
    } else {
        export_text(text, path)
    }
}

pub fn export_text(text: &str, path: &Path) -> Result<()> {
    std::fs::write(path, text).map_err(ResumeOptimizerError::Io)
}

/// Write a minimal OOXML package: content types, package relationships and a
/// document body with one paragraph per input line.
pub fn export_docx(text: &str, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).map_err(ResumeOptimizerError::Io)?;
    let mut archive = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    let parts: [(&str, String); 3] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/document.xml", document_xml(text)),
    ];

    for (name, content) in parts {
        archive
            .start_file(name, options)
            .map_err(|e| ResumeOptimizerError::Export(format!("{}: {}", name, e)))?;
        archive
            .write_all(content.as_bytes())
            .map_err(|e| ResumeOptimizerError::Export(format!("{}: {}", name, e)))?;
    }

    archive
        .finish()
        .map_err(|e| ResumeOptimizerError::Export(format!("finalize archive: {}", e)))?;

    Ok(())
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

fn document_xml(text: &str) -> String {
    let mut body = String::new();

    for line in text.lines() {
        body.push_str(&format!(
            r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
            escape_xml(line)
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
