use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::wire::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::{GenAiError, GenerativeBackend, ImagePayload};

/// Gemini `generateContent` REST client
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        api_url: String,
        text_model: String,
        image_model: String,
        timeout: Duration,
    ) -> Result<Self, GenAiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
            text_model,
            image_model,
        })
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenAiError> {
        if self.api_key.is_empty() {
            return Err(GenAiError::Authentication);
        }

        let url = format!("{}/models/{}:generateContent", self.api_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenAiError::RateLimited);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenAiError::Authentication);
        }

        if !response.status().is_success() {
            return Err(GenAiError::Api(format!("HTTP {}", response.status())));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenAiError::Api(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<Value, GenAiError> {
        let mut request = GenerateContentRequest::from_prompt(prompt);
        request.generation_config = Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema.clone()),
            ..Default::default()
        });

        let response = self.generate(&self.text_model, &request).await?;
        let text = response.first_text().ok_or(GenAiError::EmptyResponse)?;

        serde_json::from_str(text).map_err(|e| GenAiError::Schema(e.to_string()))
    }

    async fn generate_image(&self, prompt: &str) -> Result<ImagePayload, GenAiError> {
        let mut request = GenerateContentRequest::from_prompt(prompt);
        request.generation_config = Some(GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            ..Default::default()
        });

        let response = self.generate(&self.image_model, &request).await?;
        let inline = response.first_image().ok_or(GenAiError::NoImage)?;

        Ok(ImagePayload {
            mime_type: inline.mime_type.clone(),
            data: inline.data.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> GeminiClient {
        GeminiClient::new(
            api_key.to_string(),
            "https://generativelanguage.googleapis.com/v1beta".to_string(),
            "gemini-2.0-flash".to_string(),
            "gemini-2.0-flash-preview-image-generation".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn missing_api_key_fails_before_any_network_call() {
        let client = client("");

        let request = GenerateContentRequest::from_prompt("hi");
        let err = client.generate("gemini-2.0-flash", &request).await.unwrap_err();

        assert!(matches!(err, GenAiError::Authentication));
    }
}
