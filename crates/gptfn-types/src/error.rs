//! Error taxonomy for gptfn.
//!
//! Contract errors (`MissingSpecification`) surface at wrap time, before
//! any call is made. Budget and truncation errors are raised per call.
//! Transport and JSON-decode failures are carried transparently so the
//! underlying error reaches the caller unmodified -- no wrapping, no
//! retries, no suppression.

/// Errors produced by wrapping or invoking a model-backed function.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wrapped function's specification text is empty or blank.
    #[error("function has no specification text")]
    MissingSpecification,

    /// The serialized prompt exceeds the token budget for this call.
    #[error("prompt is {count} tokens but the budget allows {limit}")]
    BudgetExceeded { count: usize, limit: usize },

    /// The model stopped with `finish_reason == "length"`; the partial
    /// answer must not be treated as complete.
    #[error("model response was truncated before completion")]
    ResponseTruncated,

    /// The completion response decoded, but did not carry what the
    /// protocol promises (e.g. an empty `choices` array).
    #[error("malformed completion response: {0}")]
    MalformedResponse(&'static str),

    /// `OPENAI_API_KEY` was not present in the process environment.
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingApiKey,

    /// HTTP transport failure, propagated unmodified.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// JSON decode failure, propagated unmodified.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
