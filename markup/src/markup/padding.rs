// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Padding against the visible length, so styled text lines up in columns.

use std::{fmt::{self, Display},
          str::FromStr};

use super::{Atom, MarkupString};
use crate::{MarkupError, MarkupResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

/// Parsed `[[fill]align][width]` format spec. Align is one of `<`, `>` or `^`. A trailing
/// `s` type is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Alignment,
    pub width: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Alignment::default(),
            width: None,
        }
    }
}

fn is_align(ch: char) -> bool { matches!(ch, '<' | '>' | '^' | '=') }

impl FromStr for FormatSpec {
    type Err = MarkupError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = spec.chars().collect();

        let (fill, align_char, rest_start) = if chars.len() >= 2 && is_align(chars[1]) {
            (chars[0], Some(chars[1]), 2)
        } else if chars.first().copied().is_some_and(is_align) {
            (' ', Some(chars[0]), 1)
        } else if let Some(at) = chars.iter().copied().position(is_align) {
            return Err(MarkupError::InvalidFill {
                fill: chars[..at].iter().collect(),
            });
        } else {
            (' ', None, 0)
        };

        let align = match align_char {
            None | Some('<') => Alignment::Left,
            Some('>') => Alignment::Right,
            Some('^') => Alignment::Center,
            Some(_) => {
                return Err(MarkupError::InvalidFormatSpec {
                    spec: spec.to_string(),
                });
            }
        };

        let rest: String = chars[rest_start..].iter().collect();
        let rest = rest.strip_suffix('s').unwrap_or(&rest);

        let width = if rest.is_empty() {
            None
        } else if rest.chars().all(|ch| ch.is_ascii_digit()) {
            Some(rest.parse::<usize>().map_err(|_| MarkupError::InvalidWidth {
                width: rest.to_string(),
            })?)
        } else if rest.chars().any(|ch| ch.is_ascii_alphabetic() || ch == '.' || ch == ',') {
            return Err(MarkupError::InvalidFormatSpec {
                spec: spec.to_string(),
            });
        } else {
            return Err(MarkupError::InvalidWidth {
                width: rest.to_string(),
            });
        };

        Ok(Self { fill, align, width })
    }
}

/// Fill characters on the (left, right) of a string of `len` visible characters. Extra
/// space from centering an odd margin goes right, unless `width` is odd too.
fn margins(len: usize, width: usize, align: Alignment) -> (usize, usize) {
    let margin = width.saturating_sub(len);
    match align {
        Alignment::Left => (0, margin),
        Alignment::Right => (margin, 0),
        Alignment::Center => {
            let left = margin / 2 + (margin & width & 1);
            (left, margin - left)
        }
    }
}

impl MarkupString {
    #[must_use]
    pub fn ljust(&self, width: usize, fill: char) -> Self {
        self.pad_with(&FormatSpec {
            fill,
            align: Alignment::Left,
            width: Some(width),
        })
    }

    #[must_use]
    pub fn rjust(&self, width: usize, fill: char) -> Self {
        self.pad_with(&FormatSpec {
            fill,
            align: Alignment::Right,
            width: Some(width),
        })
    }

    #[must_use]
    pub fn center(&self, width: usize, fill: char) -> Self {
        self.pad_with(&FormatSpec {
            fill,
            align: Alignment::Center,
            width: Some(width),
        })
    }

    /// Pad according to a `[[fill]align][width]` spec.
    ///
    /// ```
    /// use r3bl_markup::MarkupString;
    ///
    /// let it = MarkupString::new("|rhi|n");
    /// assert_eq!(it.pad("*^6").unwrap().raw(), "**|rhi|n**");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidFill`], [`MarkupError::InvalidWidth`] or
    /// [`MarkupError::InvalidFormatSpec`] if `spec` can't be parsed.
    pub fn pad(&self, spec: &str) -> MarkupResult<Self> {
        Ok(self.pad_with(&spec.parse::<FormatSpec>()?))
    }

    #[must_use]
    pub fn pad_with(&self, spec: &FormatSpec) -> Self {
        let Some(width) = spec.width else {
            return self.clone();
        };
        let (left, right) = margins(self.len(), width, spec.align);
        if left == 0 && right == 0 {
            return self.clone();
        }

        let escape_char = self.config().escape_char;
        let fill = |count: usize| -> String { std::iter::repeat_n(spec.fill, count).collect() };
        let mut acc = Atom::plain_text(&fill(left), escape_char);
        acc.extend(self.atoms().iter().cloned());
        acc.extend(Atom::plain_text(&fill(right), escape_char));
        self.derive(acc)
    }
}

/// Writes the raw text. Width, fill and alignment (`{:*^20}`) pad against the visible
/// length, not the raw length.
impl Display for MarkupString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(width) = f.width() else {
            return f.write_str(self.raw());
        };
        let align = match f.align() {
            Some(fmt::Alignment::Right) => Alignment::Right,
            Some(fmt::Alignment::Center) => Alignment::Center,
            Some(fmt::Alignment::Left) | None => Alignment::Left,
        };
        let fill = f.fill();
        let fill = if fill == self.config().escape_char {
            format!("{fill}{fill}")
        } else {
            fill.to_string()
        };
        let (left, right) = margins(self.len(), width, align);
        f.write_str(&fill.repeat(left))?;
        f.write_str(self.raw())?;
        f.write_str(&fill.repeat(right))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("", FormatSpec::default())]
    #[test_case("10", FormatSpec { width: Some(10), ..Default::default() })]
    #[test_case(">5", FormatSpec { align: Alignment::Right, width: Some(5), ..Default::default() })]
    #[test_case("*^7s", FormatSpec { fill: '*', align: Alignment::Center, width: Some(7) })]
    #[test_case("<<3", FormatSpec { fill: '<', align: Alignment::Left, width: Some(3) })]
    #[test_case("-<", FormatSpec { fill: '-', align: Alignment::Left, width: None })]
    fn test_parse_spec(spec: &str, expected: FormatSpec) {
        assert_eq2!(spec.parse::<FormatSpec>(), Ok(expected));
    }

    #[test_case("ab<10", MarkupError::InvalidFill { fill: "ab".into() })]
    #[test_case("*<1x0", MarkupError::InvalidFormatSpec { spec: "*<1x0".into() })]
    #[test_case("=5", MarkupError::InvalidFormatSpec { spec: "=5".into() })]
    #[test_case("<-3", MarkupError::InvalidWidth { width: "-3".into() })]
    #[test_case("99999999999999999999999", MarkupError::InvalidWidth { width: "99999999999999999999999".into() })]
    fn test_parse_spec_errors(spec: &str, expected: MarkupError) {
        assert_eq2!(spec.parse::<FormatSpec>(), Err(expected));
    }

    #[test]
    fn test_justify_against_visible_length() {
        let it = MarkupString::new("|rab|n");
        assert_eq2!(it.ljust(5, '.').raw(), "|rab|n...");
        assert_eq2!(it.rjust(5, ' ').raw(), "   |rab|n");
        assert_eq2!(it.center(5, '-').raw(), "--|rab|n-");
        assert_eq2!(it.center(6, '-').raw(), "--|rab|n--");
        assert_eq2!(it.ljust(1, '.').raw(), "|rab|n");
        assert_eq2!(it.ljust(5, '.').len(), 5);
    }

    #[test]
    fn test_center_matches_odd_width_rule() {
        // An odd margin on an odd width puts the extra fill on the left.
        assert_eq2!(MarkupString::new("ab").center(5, '*').raw(), "**ab*");
        assert_eq2!(MarkupString::new("abc").center(6, '*').raw(), "*abc**");
        assert_eq2!(MarkupString::new("a").center(4, '*').raw(), "*a**");
    }

    #[test]
    fn test_display_pads_with_visible_length() {
        let it = MarkupString::new("|rab|n");
        assert_eq2!(format!("{it}"), "|rab|n");
        assert_eq2!(format!("[{it:>4}]"), "[  |rab|n]");
        assert_eq2!(format!("[{it:*<4}]"), "[|rab|n**]");
        assert_eq2!(format!("[{it:4}]"), "[|rab|n  ]");
    }

    #[test]
    fn test_pad_errors_propagate() {
        let it = MarkupString::new("x");
        assert_eq2!(it.pad("xy>3"), Err(MarkupError::InvalidFill { fill: "xy".into() }));
        assert_eq2!(it.pad("^3").map(|it| it.raw().to_string()), Ok(" x ".to_string()));
    }

    #[test]
    fn test_escape_char_fill_survives_reparse() {
        let it = MarkupString::new("|rab|n");
        let padded = it.rjust(3, '|');
        assert_eq2!(padded.raw(), "|||rab|n");
        assert_eq2!(padded.clean(), "|ab");
        assert_eq2!(MarkupString::new(padded.raw()), padded);
        assert_eq2!(MarkupString::new(padded.raw()).runs(), padded.runs());

        assert_eq2!(format!("{it:|<4}"), "|rab|n||||");
        assert_eq2!(MarkupString::new(&format!("{it:|<4}")).clean(), "ab||");
    }
}
