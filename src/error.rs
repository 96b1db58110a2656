use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key is not set. Set AIGEN_API_KEY or OPENAI_API_KEY, or add api_key to the config file")]
    MissingApiKey,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to connect to the LLM server")]
    Connect,
    #[error("Invalid API key or authentication failed")]
    Auth,
    #[error("API endpoint not found")]
    Endpoint,
    #[error("API request failed with status code: {0}")]
    Status(u16),
    #[error("Malformed API response: {0}")]
    Decode(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
