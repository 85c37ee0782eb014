/// Narrative-analysis service errors.
///
/// None of these ever reach a scoring caller: the scoring engine swaps in the
/// fallback scorer on any of them.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("empty response from {provider}")]
    EmptyResponse { provider: String },
}
