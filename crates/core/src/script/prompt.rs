use super::types::ScriptRequest;

/// Placeholder in an instruction that marks where the source text goes.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Build the prompt sent to the model from a script request.
///
/// If the instruction contains a `{text}` placeholder, the source text
/// replaces its first occurrence. Otherwise the source text is appended
/// after the instruction on a new line.
pub fn build_prompt(request: &ScriptRequest) -> String {
    if request.instruction.contains(TEXT_PLACEHOLDER) {
        request
            .instruction
            .replacen(TEXT_PLACEHOLDER, &request.source_text, 1)
    } else {
        format!("{}\n{}", request.instruction, request.source_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_substitution() {
        let request = ScriptRequest {
            instruction: "Summarize: {text}".to_string(),
            source_text: "AI is transforming healthcare.".to_string(),
        };

        assert_eq!(
            build_prompt(&request),
            "Summarize: AI is transforming healthcare."
        );
    }

    #[test]
    fn test_instruction_without_placeholder_appends_text() {
        let request = ScriptRequest {
            instruction: "Write a detailed summary of the following text:".to_string(),
            source_text: "This is a sample text to be summarized.".to_string(),
        };

        assert_eq!(
            build_prompt(&request),
            "Write a detailed summary of the following text:\nThis is a sample text to be summarized."
        );
    }

    #[test]
    fn test_prompt_contains_source_text_verbatim() {
        let source = "Line one.\nLine two with $dollar$ and {braces}.";
        let request = ScriptRequest {
            instruction: "Condense this into a one minute script.\n\n{text}".to_string(),
            source_text: source.to_string(),
        };

        assert!(build_prompt(&request).contains(source));
    }

    #[test]
    fn test_only_first_placeholder_is_replaced() {
        let request = ScriptRequest {
            instruction: "{text} and then {text}".to_string(),
            source_text: "hello".to_string(),
        };

        assert_eq!(build_prompt(&request), "hello and then {text}");
    }

    #[test]
    fn test_empty_source_text() {
        let request = ScriptRequest {
            instruction: "Summarize: {text}".to_string(),
            source_text: String::new(),
        };

        assert_eq!(build_prompt(&request), "Summarize: ");
    }
}
