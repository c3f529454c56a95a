use serde_json::Value;

mod gemini;
pub mod wire;

pub use gemini::GeminiClient;

/// Generative-AI provider interface
///
/// The sole boundary that talks to the hosted model. Implementations make
/// one outbound call per invocation and never retry; callers own any retry
/// policy.
#[async_trait::async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate text conforming to `schema`, returned as parsed JSON.
    ///
    /// A reply that is not valid JSON is a [`GenAiError::Schema`] failure,
    /// distinct from transport errors.
    async fn generate_structured(&self, prompt: &str, schema: &Value)
    -> Result<Value, GenAiError>;

    /// Generate a mixed text+image response and extract the image.
    ///
    /// A reply without an inline image part fails with
    /// [`GenAiError::NoImage`], regardless of any accompanying text.
    async fn generate_image(&self, prompt: &str) -> Result<ImagePayload, GenAiError>;
}

/// Inline image returned by an image-capable model
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub mime_type: String,
    /// Base64-encoded image bytes, as delivered by the API
    pub data: String,
}

impl ImagePayload {
    /// Render as a `data:` URI suitable for direct embedding
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Authentication error")]
    Authentication,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Response did not match the expected schema: {0}")]
    Schema(String),

    #[error("Response contained no candidates")]
    EmptyResponse,

    #[error("Response contained no image data")]
    NoImage,
}
