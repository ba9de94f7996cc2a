//! Error types for the inference pipelines.
//!
//! All pipeline operations return [`Result<T>`] which uses [`PipelineError`] as the error type.
//! The analyzer facade wraps these in [`AnalyzerError`](crate::analyzer::AnalyzerError).

use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`PipelineError`] as the error type.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// The unified error type for model loading and inference.
///
/// # Example
///
/// ```rust,no_run
/// use nlp_hub::error::PipelineError;
///
/// fn handle_error(e: PipelineError) {
///     match &e {
///         PipelineError::Download(_) => {
///             // Network issue or missing files on the Hub
///         }
///         PipelineError::Device(_) => {
///             // Accelerator unavailable - fall back to CPU
///         }
///         PipelineError::Tokenization(_) => {
///             // Bad input or broken tokenizer file
///         }
///         PipelineError::Unexpected(_) => {
///             eprintln!("Internal error: {e}");
///         }
///         _ => {}
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    /// Network or download failure while resolving model files.
    #[error("{0}")]
    Download(String),

    /// Tokenizer loading or encoding/decoding failure.
    #[error("{0}")]
    Tokenization(String),

    /// Device initialization failure.
    #[error("{0}")]
    Device(String),

    /// Model execution failure or malformed model metadata.
    #[error("{0}")]
    Unexpected(String),
}

impl From<hf_hub::api::sync::ApiError> for PipelineError {
    fn from(value: hf_hub::api::sync::ApiError) -> Self {
        PipelineError::Download(format!("HuggingFace API error: {value}"))
    }
}

impl From<candle_core::Error> for PipelineError {
    fn from(value: candle_core::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(value: std::io::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(value: serde_json::Error) -> Self {
        PipelineError::Unexpected(value.to_string())
    }
}

pub(crate) fn text_preview(text: &str) -> String {
    text.chars().take(50).collect()
}
