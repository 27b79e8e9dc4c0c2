// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Hand-written scanner that turns raw markup into [`Atom`]s.
//!
//! The scanner copies text into a pending literal until it sees the escape character,
//! then tries, in order:
//! 1. a link span `|l<kind><payload>|lt<text>|le` (top level only),
//! 2. a directive (see [`MarkupCode`]).
//!
//! Anything that is not recognized stays literal. Malformed markup never fails, it is
//! logged at trace level and echoed back as text.

use super::{Atom, LinkKind, MarkupCode, MarkupConfig, MarkupString};
use crate::{BasicColor, InlineString, MarkupColor, RgbValue};

/// Tokenize `raw` into atoms. Adjacent literal text is kept in a single atom.
///
/// # Example
///
/// ```
/// use r3bl_markup::{Atom, MarkupConfig, tokenize};
///
/// let atoms = tokenize("|rred|n", &MarkupConfig::default());
/// assert_eq!(atoms.len(), 3);
/// assert_eq!(atoms[1], Atom::Literal("red".into()));
/// ```
#[must_use]
pub fn tokenize(raw: &str, config: &MarkupConfig) -> Vec<Atom> {
    Scanner::new(raw, *config, true).run()
}

struct Scanner<'a> {
    input: &'a str,
    config: MarkupConfig,
    allow_links: bool,
    atoms: Vec<Atom>,
    literal: String,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, config: MarkupConfig, allow_links: bool) -> Self {
        Self {
            input,
            config,
            allow_links,
            atoms: Vec::new(),
            literal: String::new(),
        }
    }

    fn run(mut self) -> Vec<Atom> {
        let escape_char = self.config.escape_char;
        let escape_len = escape_char.len_utf8();
        let mut pos = 0;

        while pos < self.input.len() {
            let Some(offset) = self.input[pos..].find(escape_char) else {
                self.literal.push_str(&self.input[pos..]);
                break;
            };
            self.literal.push_str(&self.input[pos..pos + offset]);
            pos += offset;

            let rest = &self.input[pos + escape_len..];

            if self.allow_links
                && let Some((atom, consumed)) = self.try_link(rest)
            {
                self.flush_literal();
                self.atoms.push(atom);
                pos += escape_len + consumed;
                continue;
            }

            if let Some((code, consumed)) = try_directive(rest, &self.config) {
                self.flush_literal();
                let raw = &self.input[pos..pos + escape_len + consumed];
                self.atoms.push(Atom::Code {
                    code,
                    raw: InlineString::from(raw),
                });
                pos += escape_len + consumed;
                continue;
            }

            tracing::trace!(
                message = "unrecognized markup kept as literal text",
                at = pos,
                text = %preview(&self.input[pos..])
            );
            self.literal.push(escape_char);
            pos += escape_len;
        }

        self.flush_literal();
        self.atoms
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.atoms.push(Atom::Literal(std::mem::take(&mut self.literal)));
        }
    }

    /// `rest` starts right after an escape character. Returns the link atom and the
    /// number of bytes of `rest` it spans.
    fn try_link(&self, rest: &str) -> Option<(Atom, usize)> {
        let mut chars = rest.chars();
        if chars.next() != Some('l') {
            return None;
        }
        let kind = LinkKind::try_from_marker(chars.next()?)?;

        let escape_char = self.config.escape_char;
        let escape_len = escape_char.len_utf8();
        let payload_start = 2;

        let Some(payload_len) = find_marker(&rest[payload_start..], escape_char, "lt")
        else {
            tracing::trace!(
                message = "link without text marker kept as literal text",
                text = %preview(rest)
            );
            return None;
        };
        let payload = &rest[payload_start..payload_start + payload_len];

        let text_start = payload_start + payload_len + escape_len + 2;
        let Some(text_len) = find_marker(&rest[text_start..], escape_char, "le") else {
            tracing::trace!(
                message = "unterminated link kept as literal text",
                text = %preview(rest)
            );
            return None;
        };
        let text = &rest[text_start..text_start + text_len];

        let inner_atoms = Scanner::new(text, self.config, false).run();
        let inner = MarkupString::from_atoms(inner_atoms, self.config);

        let atom = Atom::Link {
            kind,
            payload: payload.to_string(),
            inner,
            escape_char,
        };
        Some((atom, text_start + text_len + escape_len + 2))
    }
}

/// Byte offset of the first `escape_char` + `marker` in `haystack`, skipping doubled
/// escape characters.
fn find_marker(haystack: &str, escape_char: char, marker: &str) -> Option<usize> {
    let escape_len = escape_char.len_utf8();
    let mut pos = 0;
    while let Some(offset) = haystack[pos..].find(escape_char) {
        let at = pos + offset;
        let after = &haystack[at + escape_len..];
        if after.starts_with(marker) {
            return Some(at);
        }
        pos = if after.starts_with(escape_char) {
            at + 2 * escape_len
        } else {
            at + escape_len
        };
    }
    None
}

/// `rest` starts right after an escape character. Returns the code and the number of
/// bytes of `rest` it spans.
fn try_directive(rest: &str, config: &MarkupConfig) -> Option<(MarkupCode, usize)> {
    let first = rest.chars().next()?;

    if first == config.escape_char {
        return Some((MarkupCode::EscapedEscape(first), first.len_utf8()));
    }

    let simple = match first {
        'n' => Some(MarkupCode::Reset),
        'u' => Some(MarkupCode::Underline),
        '*' => Some(MarkupCode::Invert),
        '^' => Some(MarkupCode::Blink),
        '/' => Some(MarkupCode::Newline),
        '-' => Some(MarkupCode::Tab),
        '_' => Some(MarkupCode::Space),
        '>' => Some(MarkupCode::Indent {
            width: config.tab_stop,
        }),
        _ => None,
    };
    if let Some(code) = simple {
        return Some((code, 1));
    }

    if first == '[' {
        let (color, consumed) = try_color(&rest[1..])?;
        return Some((MarkupCode::Bg(color), 1 + consumed));
    }

    let (color, consumed) = try_color(rest)?;
    Some((MarkupCode::Fg(color), consumed))
}

/// Parse a color spec: a basic letter, three cube digits, `=` + greyscale letter, or
/// `#` + six hex digits.
fn try_color(spec: &str) -> Option<(MarkupColor, usize)> {
    let bytes = spec.as_bytes();
    let first = *bytes.first()?;

    match first {
        b'#' => {
            let digits = spec.get(1..7)?;
            let rgb = RgbValue::try_from_hex_digits(digits)?;
            Some((MarkupColor::Hex(rgb), 7))
        }
        b'=' => {
            let step = *bytes.get(1)?;
            step.is_ascii_lowercase()
                .then(|| (MarkupColor::Grey(step - b'a'), 2))
        }
        b'0'..=b'5' => {
            let digits = bytes.get(0..3)?;
            if !digits.iter().all(|it| (b'0'..=b'5').contains(it)) {
                return None;
            }
            let color = MarkupColor::Xterm {
                red: digits[0] - b'0',
                green: digits[1] - b'0',
                blue: digits[2] - b'0',
            };
            Some((color, 3))
        }
        _ => {
            let (color, bright) = BasicColor::try_from_letter(char::from(first))?;
            Some((MarkupColor::Basic { color, bright }, 1))
        }
    }
}

/// First few characters of `text`, for log messages.
fn preview(text: &str) -> &str {
    let end = text.char_indices().nth(16).map_or(text.len(), |(index, _)| index);
    &text[..end]
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn code(code: MarkupCode, raw: &str) -> Atom {
        Atom::Code {
            code,
            raw: raw.into(),
        }
    }

    fn lit(text: &str) -> Atom { Atom::Literal(text.into()) }

    fn fg(color: BasicColor, bright: bool) -> MarkupCode {
        MarkupCode::Fg(MarkupColor::basic(color, bright))
    }

    #[test]
    fn test_colors_and_reset() {
        let atoms = tokenize("|relectric |cboogaloo|n", &MarkupConfig::default());
        assert_eq2!(
            atoms,
            vec![
                code(fg(BasicColor::Red, true), "|r"),
                lit("electric "),
                code(fg(BasicColor::Cyan, true), "|c"),
                lit("boogaloo"),
                code(MarkupCode::Reset, "|n"),
            ]
        );
    }

    #[test_case("|R", MarkupCode::Fg(MarkupColor::basic(BasicColor::Red, false)))]
    #[test_case("|x", MarkupCode::Fg(MarkupColor::basic(BasicColor::Black, true)))]
    #[test_case("|[b", MarkupCode::Bg(MarkupColor::basic(BasicColor::Blue, true)))]
    #[test_case("|[W", MarkupCode::Bg(MarkupColor::basic(BasicColor::White, false)))]
    #[test_case("|520", MarkupCode::Fg(MarkupColor::Xterm { red: 5, green: 2, blue: 0 }))]
    #[test_case("|[005", MarkupCode::Bg(MarkupColor::Xterm { red: 0, green: 0, blue: 5 }))]
    #[test_case("|=a", MarkupCode::Fg(MarkupColor::Grey(0)))]
    #[test_case("|[=z", MarkupCode::Bg(MarkupColor::Grey(25)))]
    #[test_case("|#00ff00", MarkupCode::Fg(MarkupColor::Hex(RgbValue::from_u8(0, 255, 0))))]
    #[test_case("|[#0000FF", MarkupCode::Bg(MarkupColor::Hex(RgbValue::from_u8(0, 0, 255))))]
    #[test_case("|u", MarkupCode::Underline)]
    #[test_case("|*", MarkupCode::Invert)]
    #[test_case("|^", MarkupCode::Blink)]
    #[test_case("|/", MarkupCode::Newline)]
    #[test_case("|-", MarkupCode::Tab)]
    #[test_case("|_", MarkupCode::Space)]
    #[test_case("|>", MarkupCode::Indent { width: 4 })]
    #[test_case("||", MarkupCode::EscapedEscape('|'))]
    fn test_single_directive(input: &str, expected: MarkupCode) {
        let atoms = tokenize(input, &MarkupConfig::default());
        assert_eq2!(atoms, vec![code(expected, input)]);
    }

    #[test_case("|q")]
    #[test_case("|")]
    #[test_case("|=A")]
    #[test_case("|#12345")]
    #[test_case("|#zzzzzz")]
    #[test_case("|[")]
    #[test_case("|[q")]
    #[test_case("|lt")]
    #[test_case("|le")]
    fn test_unknown_directive_stays_literal(input: &str) {
        let atoms = tokenize(input, &MarkupConfig::default());
        assert_eq2!(atoms, vec![lit(input)]);
    }

    #[test]
    fn test_short_cube_is_not_a_color() {
        // Two digits are not a cube color, and `6` is out of range.
        let atoms = tokenize("|52x|561", &MarkupConfig::default());
        assert_eq2!(atoms, vec![lit("|52x|561")]);
    }

    #[test]
    fn test_literals_merge_around_unknown_directives() {
        let atoms = tokenize("a|qb|rc", &MarkupConfig::default());
        assert_eq2!(
            atoms,
            vec![lit("a|qb"), code(fg(BasicColor::Red, true), "|r"), lit("c")]
        );
    }

    #[test]
    fn test_link() {
        let atoms = tokenize("go |lclook|ltat|le now", &MarkupConfig::default());
        assert_eq2!(atoms.len(), 3);
        let Atom::Link {
            kind,
            payload,
            inner,
            ..
        } = &atoms[1]
        else {
            panic!("expected a link, got {:?}", atoms[1]);
        };
        assert_eq2!(*kind, LinkKind::Command);
        assert_eq2!(payload.as_str(), "look");
        assert_eq2!(inner.raw(), "at");
    }

    #[test]
    fn test_link_inner_is_styled_but_not_nested() {
        let atoms = tokenize("|luhttps://x.y|lt|gsite |lca|ltb|le", &MarkupConfig::default());
        // The first `|le` closes the outer link. Inside it `|lc` and `|lt` are literal.
        let Atom::Link { kind, inner, .. } = &atoms[0] else {
            panic!("expected a link, got {:?}", atoms[0]);
        };
        assert_eq2!(*kind, LinkKind::Url);
        assert_eq2!(inner.clean(), "site |lca|ltb");
        assert!(inner.atoms().iter().all(|it| !matches!(it, Atom::Link { .. })));
    }

    #[test_case("|lclook")]
    #[test_case("|lclook|ltat")]
    #[test_case("|lx")]
    fn test_unterminated_link_is_literal(input: &str) {
        let atoms = tokenize(input, &MarkupConfig::default());
        let mut raw = String::new();
        let mut clean = String::new();
        for atom in &atoms {
            assert!(!matches!(atom, Atom::Link { .. }));
            atom.push_raw(&mut raw);
            atom.push_clean(&mut clean);
        }
        assert_eq2!(raw, input);
        assert_eq2!(clean, input);
    }

    #[test]
    fn test_escaped_escape_inside_link_text() {
        let atoms = tokenize("|lcsay|lta||le|le", &MarkupConfig::default());
        let Atom::Link { inner, .. } = &atoms[0] else {
            panic!("expected a link, got {:?}", atoms[0]);
        };
        assert_eq2!(inner.clean(), "a|le");
    }

    #[test]
    fn test_custom_escape_char_and_tab_stop() {
        let config = MarkupConfig::new('%', 2);
        let atoms = tokenize("%ra%>|r%%", &config);
        assert_eq2!(
            atoms,
            vec![
                code(fg(BasicColor::Red, true), "%r"),
                lit("a"),
                code(MarkupCode::Indent { width: 2 }, "%>"),
                lit("|r"),
                code(MarkupCode::EscapedEscape('%'), "%%"),
            ]
        );
    }

    #[test]
    fn test_multibyte_text() {
        let atoms = tokenize("héllo |gwörld", &MarkupConfig::default());
        assert_eq2!(
            atoms,
            vec![lit("héllo "), code(fg(BasicColor::Green, true), "|g"), lit("wörld")]
        );
    }
}
