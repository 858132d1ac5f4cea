/// Header line printed before the generated script.
pub const SCRIPT_HEADER: &str = "=== Script ===";

/// Render the script payload for stdout: the fixed header line followed by
/// the payload verbatim.
pub fn render_script(payload: &str) -> String {
    format!("{SCRIPT_HEADER}\n{payload}")
}

/// Render extracted segments as a numbered list, one per line.
pub fn render_segments(segments: &[String]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| format!("{}. {}", index + 1, segment))
        .collect::<Vec<String>>()
        .join("\n")
}
