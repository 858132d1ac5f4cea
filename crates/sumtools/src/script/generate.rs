use crate::prelude::{println, *};
use sumtools_core::script::{
    build_prompt, build_request, extract_text, render_script, render_segments, transform_script,
    ScriptOutput, ScriptRequest,
};
use tokio::io::AsyncReadExt;

use super::{
    default_instruction, generate_content, require_api_key, DEFAULT_DURATION, DEFAULT_MODEL,
};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GenerateOptions {
    /// Path to the source text file (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Instruction sent to the model; `{text}` marks where the source text goes
    #[arg(long, env = "SUMTOOLS_INSTRUCTION")]
    pub instruction: Option<String>,

    /// Read the instruction from a file
    #[arg(long, value_name = "FILE", conflicts_with = "instruction")]
    pub instruction_file: Option<String>,

    /// Target spoken length used by the default instruction
    #[arg(long, default_value = DEFAULT_DURATION)]
    pub duration: String,

    /// Gemini model name
    #[arg(short, long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum number of tokens the model may generate
    #[arg(long)]
    pub max_output_tokens: Option<u32>,

    /// List the extracted background-scene queries after the script
    #[arg(long)]
    pub scenes: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Model: {}", options.model);
    }

    let output = generate_script_data(&options).await?;

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output, options.scenes)?;
    }

    Ok(())
}

/// Runs the full pipeline and returns the structured script output: read the
/// source text, resolve the instruction, build the prompt, make the single
/// API call, and extract the payload.
pub async fn generate_script_data(options: &GenerateOptions) -> Result<ScriptOutput, Error> {
    let api_key = require_api_key(&options.api_key)?;

    let source_text = read_source_text(options.input.as_deref()).await?;
    let instruction = resolve_instruction(options).await?;

    let request = ScriptRequest {
        instruction,
        source_text,
    };
    let prompt = build_prompt(&request);

    let body = build_request(&prompt, options.temperature, options.max_output_tokens);

    let client = reqwest::Client::new();
    let response = generate_content(&client, api_key, &options.model, &body).await?;

    let payload = extract_text(&response).map_err(Error::EmptyResponse)?;

    Ok(transform_script(options.model.clone(), payload))
}

/// Read the source text from the input file, or from stdin when no path was
/// given.
async fn read_source_text(input: Option<&str>) -> Result<String, Error> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Config(f!("failed to read input '{path}': {e}"))),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .map_err(|e| Error::Config(f!("failed to read stdin: {e}")))?;
            Ok(text)
        }
    }
}

/// Resolve the instruction: inline flag first, then instruction file, then
/// the default template parameterized by the target duration.
pub async fn resolve_instruction(options: &GenerateOptions) -> Result<String, Error> {
    if let Some(instruction) = &options.instruction {
        return Ok(instruction.clone());
    }

    if let Some(path) = &options.instruction_file {
        return tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::Config(f!("failed to read instruction file '{path}': {e}")));
    }

    Ok(default_instruction(&options.duration))
}

/// Convert script output to JSON string
fn format_script_json(output: &ScriptOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert script output to formatted text
fn format_script_text(output: &ScriptOutput, show_scenes: bool) -> String {
    let mut result = render_script(&output.script);

    if show_scenes && !output.scene_queries.is_empty() {
        result.push_str("\n\n");
        result.push_str(&render_segments(&output.scene_queries));
    }

    result
}

fn output_json(output: &ScriptOutput) -> Result<()> {
    println!("{}", format_script_json(output)?);
    Ok(())
}

fn output_formatted(output: &ScriptOutput, show_scenes: bool) -> Result<()> {
    println!("{}", format_script_text(output, show_scenes));
    Ok(())
}
