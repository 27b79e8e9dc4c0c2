// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{self, Display, Formatter};

use crate::InlineVec;

pub const CSI: &str = "\x1b[";
pub const SGR: &str = "m";

/// One SGR (select graphic rendition) parameter. [`Display`] writes it as a complete
/// escape sequence; use [`SgrSequence`] to combine several into one sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Underline,
    SlowBlink,
    Invert,
    /// `30 + offset`, offset in `0..=7`.
    ForegroundBasic(u8),
    /// `40 + offset`, offset in `0..=7`.
    BackgroundBasic(u8),
    /// `100 + offset`, offset in `0..=7`.
    BackgroundBright(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl SgrCode {
    /// Write only the parameter part (no `CSI` and no `m`).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    #[rustfmt::skip]
    pub fn write_params(&self, f: &mut impl fmt::Write) -> fmt::Result {
        match *self {
            SgrCode::Reset                    => write!(f, "0"),
            SgrCode::Bold                     => write!(f, "1"),
            SgrCode::Underline                => write!(f, "4"),
            SgrCode::SlowBlink                => write!(f, "5"),
            SgrCode::Invert                   => write!(f, "7"),
            SgrCode::ForegroundBasic(offset)  => write!(f, "{}", 30 + offset),
            SgrCode::BackgroundBasic(offset)  => write!(f, "{}", 40 + offset),
            SgrCode::BackgroundBright(offset) => write!(f, "{}", 100 + u16::from(offset)),
            SgrCode::ForegroundAnsi256(index) => write!(f, "38;5;{index}"),
            SgrCode::BackgroundAnsi256(index) => write!(f, "48;5;{index}"),
            SgrCode::ForegroundRGB(r, g, b)   => write!(f, "38;2;{r};{g};{b}"),
            SgrCode::BackgroundRGB(r, g, b)   => write!(f, "48;2;{r};{g};{b}"),
        }
    }
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{CSI}")?;
        self.write_params(f)?;
        write!(f, "{SGR}")
    }
}

/// Several [`SgrCode`]s emitted as a single escape sequence, e.g. `ESC[0;1;31m`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SgrSequence {
    pub codes: InlineVec<SgrCode>,
}

impl SgrSequence {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, code: SgrCode) { self.codes.push(code); }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.codes.is_empty() }
}

impl FromIterator<SgrCode> for SgrSequence {
    fn from_iter<I: IntoIterator<Item = SgrCode>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl Display for SgrSequence {
    /// An empty sequence writes nothing.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.codes.is_empty() {
            return Ok(());
        }
        write!(f, "{CSI}")?;
        for (index, code) in self.codes.iter().enumerate() {
            if index > 0 {
                write!(f, ";")?;
            }
            code.write_params(f)?;
        }
        write!(f, "{SGR}")
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(SgrCode::Reset, "\x1b[0m")]
    #[test_case(SgrCode::Bold, "\x1b[1m")]
    #[test_case(SgrCode::Underline, "\x1b[4m")]
    #[test_case(SgrCode::SlowBlink, "\x1b[5m")]
    #[test_case(SgrCode::Invert, "\x1b[7m")]
    #[test_case(SgrCode::ForegroundBasic(1), "\x1b[31m")]
    #[test_case(SgrCode::BackgroundBasic(6), "\x1b[46m")]
    #[test_case(SgrCode::BackgroundBright(2), "\x1b[102m")]
    #[test_case(SgrCode::ForegroundAnsi256(150), "\x1b[38;5;150m")]
    #[test_case(SgrCode::BackgroundAnsi256(150), "\x1b[48;5;150m")]
    #[test_case(SgrCode::ForegroundRGB(175, 215, 135), "\x1b[38;2;175;215;135m")]
    #[test_case(SgrCode::BackgroundRGB(175, 215, 135), "\x1b[48;2;175;215;135m")]
    fn test_single_code(code: SgrCode, expected: &str) {
        assert_eq2!(code.to_string(), expected);
    }

    #[test]
    fn test_sequence_joins_params() {
        let sequence: SgrSequence = [SgrCode::Reset, SgrCode::Bold, SgrCode::ForegroundBasic(1)]
            .into_iter()
            .collect();
        assert_eq2!(sequence.to_string(), "\x1b[0;1;31m");
    }

    #[test]
    fn test_empty_sequence_writes_nothing() {
        assert_eq2!(SgrSequence::new().to_string(), "");
    }
}
