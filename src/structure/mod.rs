//! Structural resume analysis and template reformatting
//!
//! The analyzer segments raw resume text into titled sections and derives
//! coarse layout signals; the template engine reassembles recognized sections
//! under a named fixed layout. Both are pure and synchronous: they perform no
//! I/O and never fail, degrading to defaults when nothing is recognized.

pub mod sections;
pub mod analyzer;
pub mod template;

pub use analyzer::{analyze_structure, FormatType, ResumeStructure, Section};
pub use template::{apply_template, Template};
