//! Integration tests for the resume optimizer

use resume_optimizer::error::ResumeOptimizerError;
use resume_optimizer::input::InputManager;
use resume_optimizer::matching::KeywordMatcher;
use resume_optimizer::output::export::export_docx;
use resume_optimizer::structure::{analyze_structure, apply_template, FormatType};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    // First extraction
    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second extraction should use cache
    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(
        result,
        Err(ResumeOptimizerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_legacy_doc_rejected_with_conversion_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old_resume.doc");
    std::fs::write(&path, "binary-ish legacy content").unwrap();

    let mut manager = InputManager::new();
    let result = manager.extract_text(&path).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ResumeOptimizerError::LegacyDocFormat(_)));
    assert!(err.to_string().contains("convert to .docx or .pdf"));
}

#[tokio::test]
async fn test_docx_export_and_extraction_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.docx");

    export_docx("SUMMARY\nBuilt resilient services\n\nSKILLS\nRust, Tokio", &path).unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();

    assert!(text.contains("SUMMARY"));
    assert!(text.contains("Built resilient services"));
    assert!(text.contains("Rust, Tokio"));
}

#[tokio::test]
async fn test_structure_analysis_of_extracted_resume() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let structure = analyze_structure(&text);

    let titles: Vec<&str> = structure.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["SUMMARY", "EXPERIENCE", "EDUCATION", "SKILLS"]);
    assert!(structure.has_summary);
    assert!(structure.has_experience);
    assert!(structure.has_education);
    assert!(structure.has_skills);
    assert!(structure.has_contact_info);
    assert!(structure.bullet_points);
    assert_eq!(structure.format_type, FormatType::Standard);
}

#[tokio::test]
async fn test_template_application_end_to_end() {
    let mut manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let professional = apply_template(&text, "professional");
    assert!(professional.starts_with("John Doe\n"));
    assert!(professional.contains("john.doe@example.com | 555-123-4567"));
    assert!(professional.contains("PROFESSIONAL SUMMARY"));
    assert!(professional.contains("PROFESSIONAL EXPERIENCE"));

    // Original and unknown names pass the text through untouched.
    assert_eq!(apply_template(&text, "original"), text);
    assert_eq!(apply_template(&text, "no-such-template"), text);
}

#[tokio::test]
async fn test_offline_analysis_end_to_end() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let matcher = KeywordMatcher::default();
    let analysis = matcher.analyze(&job_text, &resume_text);

    assert!(analysis.matched_keywords.contains(&"postgresql".to_string()));
    assert!(analysis.matched_keywords.contains(&"docker".to_string()));
    assert!(analysis.matched_keywords.contains(&"react".to_string()));
    assert!(analysis.missing_keywords.contains(&"kubernetes".to_string()));
    assert!(analysis.score > 0 && analysis.score < 100);

    let similarity = matcher.similarity(&job_text, &resume_text);
    assert!(similarity > 0.0 && similarity < 1.0);
}
