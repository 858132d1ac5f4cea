pub mod markers;
pub mod prompt;
pub mod render;
pub mod response;
pub mod types;

pub use markers::{caption_blocks, scene_queries};
pub use prompt::{build_prompt, TEXT_PLACEHOLDER};
pub use render::{render_script, render_segments, SCRIPT_HEADER};
pub use response::{
    build_request, extract_text, GenerateContentRequest, GenerateContentResponse,
};
pub use types::{transform_script, ScriptOutput, ScriptRequest};
