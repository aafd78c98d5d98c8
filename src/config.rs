use std::env;

/// Fixed generation endpoint used when no override is configured.
pub const DEFAULT_API_ENDPOINT: &str = "https://groqprompt.netlify.app/api/ai";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_endpoint: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_endpoint: env::var("MENU_API_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string()),
        }
    }
}
