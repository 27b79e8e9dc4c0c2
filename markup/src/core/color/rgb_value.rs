// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use super::{AnsiValue, convert::convert_rgb_into_ansi256};
use crate::{InlineString, TransformColor, inline_string};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse exactly six hex digits (no leading `#`), e.g. `"00ff00"`. Returns [`None`]
    /// for anything else, so callers can fall back to treating the input as literal text.
    #[must_use]
    pub fn try_from_hex_digits(digits: &str) -> Option<RgbValue> {
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Ok(red), Ok(green), Ok(blue)) => Some(Self { red, green, blue }),
            _ => None,
        }
    }

    /// Lowercase `rrggbb` hex digits, without the leading `#`.
    #[must_use]
    pub fn to_hex_digits(&self) -> InlineString {
        inline_string!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq2!((value.red, value.green, value.blue), (1, 2, 3));
    }

    #[test_case("ff0000", Some((255, 0, 0)))]
    #[test_case("00FF7f", Some((0, 255, 127)))]
    #[test_case("ff000", None)]
    #[test_case("ff00000", None)]
    #[test_case("gg0000", None)]
    fn test_try_from_hex_digits(input: &str, expected: Option<(u8, u8, u8)>) {
        assert_eq2!(
            RgbValue::try_from_hex_digits(input),
            expected.map(RgbValue::from)
        );
    }

    #[test]
    fn test_to_hex_digits() {
        assert_eq2!(RgbValue::from_u8(0, 255, 10).to_hex_digits().as_str(), "00ff0a");
    }

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    /// ANSI: 57 `BlueViolet`
    /// RGB: #5f00ff rgb(95,0,255)
    #[test]
    fn test_rgb_to_ansi() {
        let rgb = RgbValue::from_u8(95, 0, 255);
        assert_eq2!(rgb.as_ansi(), AnsiValue::new(57));
    }
}
