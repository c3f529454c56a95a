use std::env;

use serde::{Deserialize, Serialize};

use self::genai::GenAiConfig;

pub mod genai;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub genai: GenAiConfig,

    /// Outbound request timeout at the adapter boundary
    pub timeout_seconds: u64,
}

impl Config {
    pub fn new() -> Self {
        let timeout_seconds = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30); // 30 seconds default

        Config {
            genai: GenAiConfig::new(),
            timeout_seconds,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
