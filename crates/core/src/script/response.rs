use serde::{Deserialize, Serialize};

/// Request body for the Gemini `generateContent` endpoint.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Generation parameters. Unset fields are omitted from the wire so the
/// service applies its own defaults.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// A content block, shared between requests and responses.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response envelope from `generateContent`. Only the text parts of the
/// first candidate are consumed; everything else is vendor metadata.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

/// Error envelope returned by the API on non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    pub status: Option<String>,
}

/// Build a single-turn `generateContent` request from a prompt.
pub fn build_request(
    prompt: &str,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
) -> GenerateContentRequest {
    let generation_config = if temperature.is_none() && max_output_tokens.is_none() {
        None
    } else {
        Some(GenerationConfig {
            temperature,
            max_output_tokens,
        })
    };

    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config,
    }
}

/// Extract the text payload from a response envelope.
///
/// Concatenates the text parts of the first candidate. Fails when the
/// envelope carries no candidate or the candidate carries no text part; an
/// empty string in a present text field is a valid payload.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, String> {
    let candidate = response
        .candidates
        .first()
        .ok_or_else(|| "response contained no candidates".to_string())?;

    let content = candidate
        .content
        .as_ref()
        .ok_or_else(|| "candidate contained no content".to_string())?;

    let texts: Vec<&str> = content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect();

    if texts.is_empty() {
        return Err("candidate contained no text part".to_string());
    }

    Ok(texts.concat())
}
