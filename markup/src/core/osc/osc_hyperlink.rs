// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helper functions for creating OSC 8 hyperlink sequences.

use super::osc_codes::OscSequence;

/// Creates an OSC 8 hyperlink sequence.
///
/// # Arguments
/// * `uri` - The URI/URL to link to (e.g., `<https://example.com>`)
/// * `text` - The display text for the hyperlink, which may itself contain SGR escapes
///
/// # Example
/// ```
/// use r3bl_markup::format_hyperlink;
/// let link = format_hyperlink("https://example.com", "Example");
/// assert_eq!(link, "\u{1b}]8;;https://example.com\u{7}Example\u{1b}]8;;\u{7}");
/// ```
#[must_use]
pub fn format_hyperlink(uri: &str, text: &str) -> String {
    let start = OscSequence::HyperlinkStart {
        uri: sanitize_uri(uri),
        id: None,
    };
    let end = OscSequence::HyperlinkEnd;
    format!("{start}{text}{end}")
}

/// Control characters in a URI would end the sequence early, so they are dropped.
fn sanitize_uri(uri: &str) -> String { uri.chars().filter(|c| !c.is_control()).collect() }

#[cfg(test)]
mod tests {
    use super::format_hyperlink;
    use crate::assert_eq2;

    #[test]
    fn test_format_hyperlink_basic() {
        let result = format_hyperlink("https://example.com", "Example Link");
        let expected = "\x1b]8;;https://example.com\x07Example Link\x1b]8;;\x07";
        assert_eq2!(result, expected);
    }

    #[test]
    fn test_format_hyperlink_empty() {
        let result = format_hyperlink("", "Empty URI");
        let expected = "\x1b]8;;\x07Empty URI\x1b]8;;\x07";
        assert_eq2!(result, expected);
    }

    #[test]
    fn test_format_hyperlink_special_chars() {
        let result =
            format_hyperlink("https://example.com/path?q=test&v=1", "Complex URL");
        let expected =
            "\x1b]8;;https://example.com/path?q=test&v=1\x07Complex URL\x1b]8;;\x07";
        assert_eq2!(result, expected);
    }

    #[test]
    fn test_format_hyperlink_drops_control_chars_in_uri() {
        let result = format_hyperlink("https://evil\x07.com\x1b", "x");
        assert_eq2!(result, "\x1b]8;;https://evil.com\x07x\x1b]8;;\x07");
    }
}
