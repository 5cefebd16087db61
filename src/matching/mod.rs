//! Offline keyword matching
//! Produces the same keyword-analysis shape as the hosted LLM path, computed
//! locally from token overlap between job description and resume.

pub mod text;
pub mod keyword_matcher;

pub use keyword_matcher::KeywordMatcher;
