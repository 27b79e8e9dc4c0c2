// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::MarkupColor;

/// A single directive recognized by the tokenizer. Style codes have no visible width;
/// whitespace codes and the escaped escape character stand for visible text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupCode {
    /// `|n`: clears all style attributes.
    Reset,
    Fg(MarkupColor),
    Bg(MarkupColor),
    /// `|u`: flips underline.
    Underline,
    /// `|*`: flips inverse video.
    Invert,
    /// `|^`: flips blink.
    Blink,
    /// `|/`
    Newline,
    /// `|-`
    Tab,
    /// `|_`
    Space,
    /// `|>`: `width` spaces.
    Indent { width: u8 },
    /// Doubled escape character, stands for one literal escape character.
    EscapedEscape(char),
}

impl MarkupCode {
    /// Number of characters this code contributes to the clean text.
    #[must_use]
    pub fn visible_width(&self) -> usize {
        match self {
            MarkupCode::Newline
            | MarkupCode::Tab
            | MarkupCode::Space
            | MarkupCode::EscapedEscape(_) => 1,
            MarkupCode::Indent { width } => usize::from(*width),
            MarkupCode::Reset
            | MarkupCode::Fg(_)
            | MarkupCode::Bg(_)
            | MarkupCode::Underline
            | MarkupCode::Invert
            | MarkupCode::Blink => 0,
        }
    }

    #[must_use]
    pub fn is_zero_width(&self) -> bool { self.visible_width() == 0 }

    /// Append the clean text of this code to `acc`.
    pub fn push_clean(&self, acc: &mut String) {
        match self {
            MarkupCode::Newline => acc.push('\n'),
            MarkupCode::Tab => acc.push('\t'),
            MarkupCode::Space => acc.push(' '),
            MarkupCode::Indent { width } => {
                acc.extend(std::iter::repeat_n(' ', usize::from(*width)));
            }
            MarkupCode::EscapedEscape(escape_char) => acc.push(*escape_char),
            _ => {}
        }
    }

    /// Whether every character of the clean text satisfies `predicate`. Zero width codes
    /// never match.
    pub fn clean_text_matches(&self, predicate: impl Fn(char) -> bool) -> bool {
        if self.is_zero_width() {
            return false;
        }
        let mut acc = String::new();
        self.push_clean(&mut acc);
        acc.chars().all(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, assert_eq2};

    #[test]
    fn test_widths() {
        let red = MarkupColor::basic(BasicColor::Red, true);
        assert_eq2!(MarkupCode::Fg(red).visible_width(), 0);
        assert_eq2!(MarkupCode::Reset.visible_width(), 0);
        assert_eq2!(MarkupCode::Space.visible_width(), 1);
        assert_eq2!(MarkupCode::EscapedEscape('|').visible_width(), 1);
        assert_eq2!(MarkupCode::Indent { width: 4 }.visible_width(), 4);
    }

    #[test]
    fn test_push_clean() {
        let mut acc = String::new();
        for code in [
            MarkupCode::Newline,
            MarkupCode::Tab,
            MarkupCode::Indent { width: 2 },
            MarkupCode::EscapedEscape('|'),
            MarkupCode::Underline,
        ] {
            code.push_clean(&mut acc);
        }
        assert_eq2!(acc, "\n\t  |");
    }

    #[test]
    fn test_clean_text_matches() {
        assert!(MarkupCode::Indent { width: 3 }.clean_text_matches(char::is_whitespace));
        assert!(!MarkupCode::EscapedEscape('|').clean_text_matches(char::is_whitespace));
        assert!(!MarkupCode::Blink.clean_text_matches(|_| true));
    }
}
