use serde::Serialize;

use crate::script::markers::scene_queries;

/// A request to turn long-form text into a short narration script.
#[derive(Debug, Clone)]
pub struct ScriptRequest {
    /// The instruction sent to the model. May contain a `{text}` placeholder
    /// marking where the source text goes.
    pub instruction: String,
    /// The long-form text to summarize.
    pub source_text: String,
}

/// Generated script output
#[derive(Debug, Serialize, Clone)]
pub struct ScriptOutput {
    pub model: String,
    /// The narration script returned by the model, verbatim.
    pub script: String,
    /// Background-scene search queries the model marked with `$...$`.
    pub scene_queries: Vec<String>,
}

/// Build the structured output from the model's text payload.
pub fn transform_script(model: String, payload: String) -> ScriptOutput {
    let scene_queries = scene_queries(&payload);

    ScriptOutput {
        model,
        script: payload,
        scene_queries,
    }
}
