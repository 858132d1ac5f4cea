use regex::Regex;

/// Extract background-scene search queries from a script.
///
/// The generation instruction asks the model to wrap one short English
/// scene description per paragraph in dollar signs. Matches are non-greedy
/// and stay within a single line.
pub fn scene_queries(text: &str) -> Vec<String> {
    let re = Regex::new(r"\$(.*?)\$").unwrap();

    re.captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extract caption blocks from a script.
///
/// Caption blocks are wrapped in `#` markers and may span multiple lines.
pub fn caption_blocks(text: &str) -> Vec<String> {
    let re = Regex::new(r"#([^#]*)#").unwrap();

    re.captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_queries_in_order() {
        let text = "Intro paragraph.\n$city skyline at night$\n\
                    Second paragraph.\n$busy hospital corridor$";

        assert_eq!(
            scene_queries(text),
            vec!["city skyline at night", "busy hospital corridor"]
        );
    }

    #[test]
    fn test_scene_queries_do_not_cross_lines() {
        let text = "An unpaired $marker on one line\nand another$ further down";

        assert!(scene_queries(text).is_empty());
    }

    #[test]
    fn test_no_markers_yields_empty() {
        assert!(scene_queries("Plain narration without markers.").is_empty());
        assert!(caption_blocks("Plain narration without markers.").is_empty());
    }

    #[test]
    fn test_caption_blocks_span_lines() {
        let text = "#First caption\nwith a second line# filler #Second caption#";

        assert_eq!(
            caption_blocks(text),
            vec!["First caption\nwith a second line", "Second caption"]
        );
    }

    #[test]
    fn test_empty_segment_is_kept() {
        // `$$` marks an intentionally blank scene slot.
        assert_eq!(scene_queries("before $$ after"), vec![""]);
    }
}
