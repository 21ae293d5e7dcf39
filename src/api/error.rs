use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse API response: {source}. Response: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Provider error: {message}")]
    Provider { message: String },

    #[error("Incomplete API response: {0}")]
    Incomplete(&'static str),
}
