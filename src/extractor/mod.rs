//! Extraction strategies and the pipeline that combines them.
//!
//! - [`pipeline`]: orchestration, cleaned-DOM strategy, candidate selection
//! - [`fallback`]: the plain-text line filter

pub mod fallback;
pub mod pipeline;

pub use fallback::{plain_text, plain_text_from_document, sanitize_extracted_text};
pub use pipeline::{clean_html, extract_report};
