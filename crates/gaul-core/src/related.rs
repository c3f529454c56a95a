use gaul_genai::{GenAiError, GenerativeBackend};

use crate::schema;

/// Suggest a short list of terms related to the query; may be empty.
pub async fn suggest_related_terms<B: GenerativeBackend + ?Sized>(
    backend: &B,
    query: &str,
) -> Result<Vec<String>, GenAiError> {
    let prompt = build_prompt(query);
    let value = backend
        .generate_structured(&prompt, &schema::related_terms_schema())
        .await?;

    schema::parse_related_terms(value)
}

fn build_prompt(query: &str) -> String {
    format!(
        "You are an expert in modern youth language and culture. Suggest up to five \
         other slang terms, phrases, or emojis that someone searching for \"{query}\" \
         would also want to look up. Return only the relatedTerms list; leave it \
         empty if nothing fits."
    )
}
