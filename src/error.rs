//! Error types for jd-extract.
//!
//! Every variant is a terminal, user-facing failure of a single
//! fetch-and-extract attempt. Nothing here is retried internally.

/// Boxed error type used to carry fetch-client failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The URL is not `http`/`https`; the caller has to collect the text manually.
    #[error("Job description must be provided manually for this job.")]
    ManualInputRequired {
        /// The rejected URL.
        url: String,
    },

    /// The network or HTTP layer failed.
    #[error("Failed to retrieve job description: {0}")]
    FetchFailed(#[source] BoxError),

    /// The request query string was stripped by a redirect to a generic page.
    #[error(
        "The site redirected to a generic careers page. Some job boards rely on query \
         parameters that are stripped when accessed without a browser session. Try using \
         a direct job posting link (e.g., a 'View job' or 'Print view' URL) or copy the job \
         description text and paste it manually."
    )]
    GenericRedirectDetected,

    /// Every extraction strategy produced nothing.
    #[error("Job description appears to be empty.")]
    EmptyDescription,
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
