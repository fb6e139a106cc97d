//! Simple CLI that reads a response body from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [CONTENT_TYPE] [ORIGINAL_URL] [EFFECTIVE_URL]`
//!
//! The content type defaults to `text/html`; the URLs default to empty,
//! which skips the URL checks. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`). Exits non-zero when extraction fails.

use std::io::{self, Read};
use std::process::ExitCode;

use jd_extract::{extract_report, CandidateOrigin, Options};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Candidate {
    origin: CandidateOrigin,
    score: f64,
    len: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Output {
    Success {
        markdown: String,
        origin: CandidateOrigin,
        candidates: Vec<Candidate>,
    },
    Failure {
        error: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let content_type = args.next().unwrap_or_else(|| "text/html".to_string());
    let original_url = args.next().unwrap_or_default();
    let effective_url = args.next().unwrap_or_else(|| original_url.clone());

    let mut body = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut body) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let (output, code) = match extract_report(&body, &content_type, &original_url, &effective_url, &Options::default())
    {
        Ok(report) => (
            Output::Success {
                candidates: report
                    .candidates
                    .iter()
                    .map(|c| Candidate {
                        origin: c.candidate.origin,
                        score: c.score,
                        len: c.candidate.text.chars().count(),
                    })
                    .collect(),
                markdown: report.markdown,
                origin: report.origin,
            },
            ExitCode::SUCCESS,
        ),
        Err(err) => {
            tracing::info!(error = %err, "extraction failed");
            (Output::Failure { error: err.to_string() }, ExitCode::FAILURE)
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
    code
}
