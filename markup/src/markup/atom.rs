// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

use super::{MarkupCode, MarkupString};
use crate::InlineString;

/// What clicking a link does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LinkKind {
    /// Sends the payload to the server as a command (`|lc`).
    Command,
    /// Opens the payload as a URL (`|lu`).
    Url,
}

impl LinkKind {
    /// The letter following `l` in the link opener.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            LinkKind::Command => 'c',
            LinkKind::Url => 'u',
        }
    }

    #[must_use]
    pub const fn try_from_marker(marker: char) -> Option<Self> {
        match marker {
            'c' => Some(LinkKind::Command),
            'u' => Some(LinkKind::Url),
            _ => None,
        }
    }
}

/// Smallest unit of a [`MarkupString`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Plain text, width is the number of characters.
    Literal(String),
    /// A directive, along with its exact spelling in the raw text.
    Code { code: MarkupCode, raw: InlineString },
    /// A clickable span. `inner` never contains another link.
    Link {
        kind: LinkKind,
        payload: String,
        inner: MarkupString,
        escape_char: char,
    },
}

impl Atom {
    #[must_use]
    pub fn visible_width(&self) -> usize {
        match self {
            Atom::Literal(text) => text.chars().count(),
            Atom::Code { code, .. } => code.visible_width(),
            Atom::Link { inner, .. } => inner.len(),
        }
    }

    #[must_use]
    pub fn is_zero_width(&self) -> bool {
        match self {
            Atom::Literal(text) => text.is_empty(),
            Atom::Code { code, .. } => code.is_zero_width(),
            Atom::Link { inner, .. } => inner.is_empty(),
        }
    }

    /// Only codes are style carriers. Empty literals and empty links are neither.
    #[must_use]
    pub fn is_style_code(&self) -> bool {
        matches!(self, Atom::Code { code, .. } if code.is_zero_width())
    }

    /// Zero width atoms that slicing carries along with the text after them: style codes
    /// and empty links.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        match self {
            Atom::Literal(_) => false,
            Atom::Code { .. } => self.is_style_code(),
            Atom::Link { inner, .. } => inner.is_empty(),
        }
    }

    /// Atoms for plain `text` whose raw form parses back to the same text. Each
    /// `escape_char` in it becomes an escaped escape.
    #[must_use]
    pub fn plain_text(text: &str, escape_char: char) -> Vec<Atom> {
        let mut acc = Vec::new();
        for (index, piece) in text.split(escape_char).enumerate() {
            if index > 0 {
                let mut raw = InlineString::new();
                raw.push(escape_char);
                raw.push(escape_char);
                acc.push(Atom::Code {
                    code: MarkupCode::EscapedEscape(escape_char),
                    raw,
                });
            }
            if !piece.is_empty() {
                acc.push(Atom::Literal(piece.to_string()));
            }
        }
        acc
    }

    #[must_use]
    pub fn is_reset(&self) -> bool {
        matches!(self, Atom::Code { code: MarkupCode::Reset, .. })
    }

    pub fn push_clean(&self, acc: &mut String) {
        match self {
            Atom::Literal(text) => acc.push_str(text),
            Atom::Code { code, .. } => code.push_clean(acc),
            Atom::Link { inner, .. } => acc.push_str(inner.clean()),
        }
    }

    pub fn push_raw(&self, acc: &mut String) {
        match self {
            Atom::Literal(text) => acc.push_str(text),
            Atom::Code { raw, .. } => acc.push_str(raw),
            Atom::Link {
                kind,
                payload,
                inner,
                escape_char,
            } => {
                acc.push(*escape_char);
                acc.push('l');
                acc.push(kind.marker());
                acc.push_str(payload);
                acc.push(*escape_char);
                acc.push_str("lt");
                acc.push_str(inner.raw());
                acc.push(*escape_char);
                acc.push_str("le");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_link_kind_markers() {
        assert_eq2!(LinkKind::try_from_marker('c'), Some(LinkKind::Command));
        assert_eq2!(LinkKind::try_from_marker('u'), Some(LinkKind::Url));
        assert_eq2!(LinkKind::try_from_marker('x'), None);
        assert_eq2!(LinkKind::Url.to_string(), "url");
        assert_eq2!(LinkKind::from_str("command"), Ok(LinkKind::Command));
    }

    #[test]
    fn test_link_raw_and_clean() {
        let link = Atom::Link {
            kind: LinkKind::Command,
            payload: "look".into(),
            inner: MarkupString::new("|rat"),
            escape_char: '|',
        };
        let mut raw = String::new();
        link.push_raw(&mut raw);
        assert_eq2!(raw, "|lclook|lt|rat|le");

        let mut clean = String::new();
        link.push_clean(&mut clean);
        assert_eq2!(clean, "at");
        assert_eq2!(link.visible_width(), 2);
    }

    #[test]
    fn test_zero_width() {
        assert!(Atom::Literal(String::new()).is_zero_width());
        assert!(!Atom::Literal("a".into()).is_zero_width());
        assert!(
            Atom::Code {
                code: MarkupCode::Reset,
                raw: "|n".into()
            }
            .is_reset()
        );
    }
}
