//! Structured-data extraction.
//!
//! Pages often describe their job posting in a Schema.org JSON-LD block that
//! is independent of the visible markup. [`json_ld`] pulls the posting's
//! description out of it.

pub mod json_ld;

pub use json_ld::{extract_job_description, find_job_posting_description, json_ld_payloads};
