use gaul_genai::{GenAiError, GenerativeBackend};
use gaul_types::{Interpretation, Language};

use crate::schema;

/// Produce a structured interpretation for a (query, language) pair.
///
/// One structured call, no retry, no cache.
pub async fn interpret_youth_language<B: GenerativeBackend + ?Sized>(
    backend: &B,
    query: &str,
    language: Language,
) -> Result<Interpretation, GenAiError> {
    let prompt = build_prompt(query, language);
    let value = backend
        .generate_structured(&prompt, &schema::interpretation_schema())
        .await?;

    schema::parse_interpretation(value)
}

fn build_prompt(query: &str, language: Language) -> String {
    let directive = match language {
        Language::En => "Respond in English.",
        Language::Id => "Respond in Bahasa Indonesia.",
    };

    format!(
        "You are an expert in modern youth language and culture. Given a keyword, \
         phrase, or emoji, you will provide a detailed interpretation of its meaning \
         and usage.\n\n\
         {directive}\n\n\
         Analyze the following input:\n\
         {query}\n\n\
         Provide the following information in your response:\n\
         - termPhrase: The entered term or phrase.\n\
         - platform: The platform where the term is commonly used (e.g., Instagram, TikTok, WhatsApp).\n\
         - meaning: A brief description of the meaning of the term.\n\
         - linguisticCategory: The linguistic category of the term (e.g., Emoji, Singkatan, Slang).\n\
         - socialCategory: The social category of the term (e.g., Komunikasi Sosial, Ekspresi Emosi).\n\
         - explanation: A detailed explanation of the term and its usage.\n\
         - references: Links to references for further reading.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_query() {
        let prompt = build_prompt("rizz", Language::En);

        assert!(prompt.contains("rizz"));
        assert!(prompt.contains("Respond in English."));
    }

    #[test]
    fn indonesian_prompt_directs_the_response_language() {
        let prompt = build_prompt("💀", Language::Id);

        assert!(prompt.contains("💀"));
        assert!(prompt.contains("Respond in Bahasa Indonesia."));
    }
}
