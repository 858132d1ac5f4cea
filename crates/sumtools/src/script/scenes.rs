use crate::prelude::{println, *};
use sumtools_core::script::{caption_blocks, render_segments, scene_queries};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ScenesOptions {
    /// Path to a saved script file
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Extract caption blocks (between `#` markers) instead of scene queries
    #[arg(long)]
    pub captions: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ScenesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Reading script from {}", options.file);
    }

    let text = tokio::fs::read_to_string(&options.file)
        .await
        .map_err(|e| eyre!("Failed to read script file '{}': {}", options.file, e))?;

    let segments = extract_segments(&text, options.captions);

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&segments)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
    } else if segments.is_empty() {
        println!("No marked segments found.");
    } else {
        println!("{}", render_segments(&segments));
    }

    Ok(())
}

/// Pull the marked segments out of a saved script.
pub fn extract_segments(text: &str, captions: bool) -> Vec<String> {
    if captions {
        caption_blocks(text)
    } else {
        scene_queries(text)
    }
}
