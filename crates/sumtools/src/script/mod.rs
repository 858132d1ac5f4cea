use crate::prelude::{println, *};
use sumtools_core::script::response::ApiErrorResponse;
use sumtools_core::script::{GenerateContentRequest, GenerateContentResponse};

pub mod generate;
pub mod scenes;

// Re-export public data functions
pub use generate::generate_script_data;
pub use scenes::extract_segments;

// Re-export domain types from core
pub use sumtools_core::script::{ScriptOutput, ScriptRequest};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when neither `--model` nor `GEMINI_MODEL` is set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Target spoken length used by the default instruction.
pub const DEFAULT_DURATION: &str = "about one minute";

#[derive(Debug, clap::Parser)]
#[command(name = "script")]
#[command(about = "Generate and post-process video narration scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Generate a narration script from long-form text
    #[clap(name = "generate")]
    Generate(generate::GenerateOptions),

    /// Extract marked segments from a saved script
    #[clap(name = "scenes")]
    Scenes(scenes::ScenesOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Gemini API Base: {}", GEMINI_API_BASE);
        println!();
    }

    match app.command {
        Commands::Generate(options) => generate::run(options, global).await,
        Commands::Scenes(options) => scenes::run(options, global).await,
    }
}

// Shared utility functions
pub fn get_api_base() -> &'static str {
    GEMINI_API_BASE
}

/// Instruction used when no `--instruction`/`--instruction-file` is given.
///
/// Asks for a narration script of the requested spoken length, with one
/// background-scene description per paragraph wrapped in `$` markers. The
/// `{text}` placeholder marks where the source text is substituted.
pub fn default_instruction(duration: &str) -> String {
    format!(
        "Summarize the following text into a clear, engaging narration script for a \
         video of {duration}. Write in natural spoken language, without preamble or \
         commentary. After each paragraph, add one short English description of a \
         matching background scene, wrapped in dollar signs, like \
         $city skyline at night$.\n\nSource text:\n{{text}}"
    )
}

pub fn require_api_key(api_key: &str) -> Result<&str, Error> {
    if api_key.trim().is_empty() {
        return Err(Error::Config(
            "Gemini API key is empty. Pass --api-key or set GEMINI_API_KEY".to_string(),
        ));
    }

    Ok(api_key)
}

/// Perform the single `generateContent` round trip.
pub async fn generate_content(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, Error> {
    let url = f!("{}/models/{model}:generateContent", get_api_base());

    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(request)
        .send()
        .await
        .map_err(|e| Error::Transport(f!("request to Gemini failed: {e}")))?;

    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        return Err(Error::Service {
            status: status.as_u16(),
            message,
        });
    }

    response.json().await.map_err(|e| Error::Service {
        status: status.as_u16(),
        message: f!("failed to decode response body: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_instruction_keeps_text_placeholder() {
        let instruction = default_instruction(DEFAULT_DURATION);

        assert!(instruction.contains("{text}"));
        assert!(instruction.contains("about one minute"));
    }

    #[test]
    fn test_default_instruction_takes_duration() {
        let instruction = default_instruction("roughly ninety seconds");

        assert!(instruction.contains("roughly ninety seconds"));
        assert!(!instruction.contains("{duration}"));
    }

    #[test]
    fn test_require_api_key_rejects_blank() {
        assert!(require_api_key("").is_err());
        assert!(require_api_key("   ").is_err());
        assert_eq!(require_api_key("AIza-test").unwrap(), "AIza-test");
    }
}
