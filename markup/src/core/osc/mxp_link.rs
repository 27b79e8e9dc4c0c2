// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! MXP (MUD eXtension Protocol) link tags.
//!
//! Each tag is preceded by the `ESC[4z` line mode switch ("temp secure"), which lets the
//! client interpret exactly the following tag. So a command link looks like:
//!
//! ```text
//! ESC[4z<SEND HREF="look">ESC[4z</SEND>
//! ```
//!
//! More info: <https://www.zuggsoft.com/zmud/mxp.htm>

/// MXP line mode switch: temp secure.
pub const MXP_TEMP_SECURE: &str = "\x1b[4z";

/// Wrap `text` in an MXP `SEND` tag, so clicking it sends `command` to the server.
///
/// ```
/// use r3bl_markup::format_mxp_send;
/// assert_eq!(
///     format_mxp_send("look", "at"),
///     "\x1b[4z<SEND HREF=\"look\">at\x1b[4z</SEND>"
/// );
/// ```
#[must_use]
pub fn format_mxp_send(command: &str, text: &str) -> String {
    format!(
        "{MXP_TEMP_SECURE}<SEND HREF=\"{href}\">{text}{MXP_TEMP_SECURE}</SEND>",
        href = escape_attribute(command)
    )
}

/// Wrap `text` in an MXP `A` (anchor) tag pointing at `url`.
#[must_use]
pub fn format_mxp_anchor(url: &str, text: &str) -> String {
    format!(
        "{MXP_TEMP_SECURE}<A HREF=\"{href}\">{text}{MXP_TEMP_SECURE}</A>",
        href = escape_attribute(url)
    )
}

fn escape_attribute(value: &str) -> String {
    let mut acc = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => acc.push_str("&quot;"),
            '&' => acc.push_str("&amp;"),
            '<' => acc.push_str("&lt;"),
            '>' => acc.push_str("&gt;"),
            ch if ch.is_control() => {}
            ch => acc.push(ch),
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_anchor() {
        assert_eq2!(
            format_mxp_anchor("https://example.com", "site"),
            "\x1b[4z<A HREF=\"https://example.com\">site\x1b[4z</A>"
        );
    }

    #[test]
    fn test_href_is_escaped() {
        assert_eq2!(
            format_mxp_send("say \"hi\" <&>", "x"),
            "\x1b[4z<SEND HREF=\"say &quot;hi&quot; &lt;&amp;&gt;\">x\x1b[4z</SEND>"
        );
    }
}
