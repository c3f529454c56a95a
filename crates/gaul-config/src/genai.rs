use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_text_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.0-flash-preview-image-generation".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GenAiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Model for structured interpretation and related-terms calls
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Image-capable model for comic-strip generation
    #[serde(default = "default_image_model")]
    pub image_model: String,
}

impl GenAiConfig {
    pub fn new() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| default_api_url());
        let text_model = env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| default_text_model());
        let image_model = env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| default_image_model());

        GenAiConfig {
            api_key,
            api_url,
            text_model,
            image_model,
        }
    }
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
        }
    }
}
