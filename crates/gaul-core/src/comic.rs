use gaul_genai::GenerativeBackend;
use gaul_types::{ComicRequest, Language};

use crate::error::ComicError;

/// Render a 4-panel comic strip for a term's example dialogue.
///
/// Returns a `data:` URI. A text-only model reply is a hard failure; no
/// placeholder image is ever produced.
pub async fn generate_comic_strip<B: GenerativeBackend + ?Sized>(
    backend: &B,
    request: &ComicRequest,
) -> Result<String, ComicError> {
    if request.term_phrase.trim().is_empty() {
        return Err(ComicError::EmptyTerm);
    }

    let prompt = build_prompt(request);
    let image = backend.generate_image(&prompt).await?;

    Ok(image.to_data_uri())
}

fn build_prompt(request: &ComicRequest) -> String {
    let conversation_language = match request.language {
        Language::En => "English",
        Language::Id => "Bahasa Indonesia",
    };
    let dialogue = request.example_sentences.join("\n- ");

    format!(
        "Generate a single image that is a 4-panel comic strip. The comic strip \
         should be fun, simple, black and white, minimalist, and use a line-art \
         style. The comic should visually illustrate the following conversation \
         without using any text or speech bubbles. The conversation is about: \
         \"{term}\". The style should appeal to a young, modern audience.\n\n\
         Conversation (in {conversation_language}):\n\
         - {dialogue}\n",
        term = request.term_phrase,
    )
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use gaul_genai::{GenAiError, ImagePayload};
    use serde_json::Value;

    use super::*;

    struct ImageStub {
        payload: Option<ImagePayload>,
    }

    #[async_trait]
    impl GenerativeBackend for ImageStub {
        async fn generate_structured(
            &self,
            _prompt: &str,
            _schema: &Value,
        ) -> Result<Value, GenAiError> {
            Err(GenAiError::Api("structured calls not expected here".to_string()))
        }

        async fn generate_image(&self, _prompt: &str) -> Result<ImagePayload, GenAiError> {
            match &self.payload {
                Some(payload) => Ok(payload.clone()),
                None => Err(GenAiError::NoImage),
            }
        }
    }

    fn request(term: &str) -> ComicRequest {
        ComicRequest {
            term_phrase: term.to_string(),
            example_sentences: vec![
                "Did you see his rizz?".to_string(),
                "Unspoken rizz, fr.".to_string(),
            ],
            language: Language::En,
        }
    }

    #[tokio::test]
    async fn successful_generation_yields_a_data_uri() {
        let backend = ImageStub {
            payload: Some(ImagePayload {
                mime_type: "image/png".to_string(),
                data: "aGVsbG8=".to_string(),
            }),
        };

        let uri = generate_comic_strip(&backend, &request("rizz")).await.unwrap();
        assert!(uri.starts_with("data:image/"));
        assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn text_only_reply_is_a_generation_failure() {
        let backend = ImageStub { payload: None };

        let err = generate_comic_strip(&backend, &request("rizz")).await.unwrap_err();
        assert!(matches!(err, ComicError::Generation(GenAiError::NoImage)));
    }

    #[tokio::test]
    async fn blank_term_is_rejected_without_a_call() {
        let backend = ImageStub { payload: None };

        let err = generate_comic_strip(&backend, &request("  ")).await.unwrap_err();
        assert!(matches!(err, ComicError::EmptyTerm));
    }

    #[test]
    fn prompt_lists_the_dialogue_in_order() {
        let prompt = build_prompt(&request("rizz"));

        assert!(prompt.contains("\"rizz\""));
        assert!(prompt.contains("4-panel comic strip"));
        assert!(prompt.contains("without using any text or speech bubbles"));
        let first = prompt.find("Did you see his rizz?").unwrap();
        let second = prompt.find("Unspoken rizz, fr.").unwrap();
        assert!(first < second);
    }

    #[test]
    fn prompt_names_the_conversation_language() {
        let mut indonesian = request("spill");
        indonesian.language = Language::Id;

        assert!(build_prompt(&indonesian).contains("Bahasa Indonesia"));
    }
}
