use serde::{Deserialize, Serialize};

use crate::errors::NarrativeError;

/// Inline document sent along with the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

/// One call to the narrative-analysis service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeRequest {
    pub prompt: String,
    pub attachments: Vec<Attachment>,
}

impl NarrativeRequest {
    pub fn is_multimodal(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// External free-text fraud opinion.
///
/// Implementations report every failure as an error; deciding what to do
/// about it is the caller's job.
pub trait INarrativeAnalyzer: Send + Sync {
    /// Return the service's free-text analysis of the request.
    fn analyze(&self, request: &NarrativeRequest) -> Result<String, NarrativeError>;

    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Whether image attachments are accepted.
    fn supports_multimodal(&self) -> bool {
        true
    }
}
