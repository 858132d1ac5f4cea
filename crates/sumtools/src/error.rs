#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Gemini API error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    #[error("Empty response from Gemini: {0}")]
    EmptyResponse(String),
}
