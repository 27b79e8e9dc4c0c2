// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Colors as they are written in markup, and their canonical forms.
//!
//! | Markup               | Variant                    |
//! |----------------------|----------------------------|
//! | `r`, `R`, ... `x`    | [`MarkupColor::Basic`]     |
//! | `500` (digits 0-5)   | [`MarkupColor::Xterm`]     |
//! | `=a` ... `=z`        | [`MarkupColor::Grey`]      |
//! | `#00ff00`            | [`MarkupColor::Hex`]       |
//!
//! Lowercase letters are the bright variant, uppercase the normal one. So `|r` is bright
//! red and `|R` is dark red. `|x` is bright black (dark gray) and `|X` is black.

use strum_macros::{EnumCount, EnumIter};

use super::{AnsiValue, RgbValue, TransformColor,
            convert::{GRAY_RAMP_START_INDEX, cube_index, nearest_cube_digit}};

/// Number of steps in the `|=a` .. `|=z` greyscale.
pub const GREY_STEPS: u8 = 26;

/// The eight colors of the basic ANSI palette, in SGR order (`30 + offset`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BasicColor {
    /// Offset from the SGR base (30 for foreground, 40 for background).
    #[must_use]
    pub const fn sgr_offset(self) -> u8 {
        match self {
            BasicColor::Black => 0,
            BasicColor::Red => 1,
            BasicColor::Green => 2,
            BasicColor::Yellow => 3,
            BasicColor::Blue => 4,
            BasicColor::Magenta => 5,
            BasicColor::Cyan => 6,
            BasicColor::White => 7,
        }
    }

    /// Palette index (0..=15) of this color.
    #[must_use]
    pub const fn palette_index(self, bright: bool) -> u8 {
        if bright { self.sgr_offset() + 8 } else { self.sgr_offset() }
    }

    /// Parse a markup color letter, returning the color and whether it is bright.
    #[must_use]
    pub fn try_from_letter(letter: char) -> Option<(BasicColor, bool)> {
        let color = match letter.to_ascii_lowercase() {
            'x' => BasicColor::Black,
            'r' => BasicColor::Red,
            'g' => BasicColor::Green,
            'y' => BasicColor::Yellow,
            'b' => BasicColor::Blue,
            'm' => BasicColor::Magenta,
            'c' => BasicColor::Cyan,
            'w' => BasicColor::White,
            _ => return None,
        };
        Some((color, letter.is_ascii_lowercase()))
    }

    /// The markup letter for this color.
    #[must_use]
    pub fn to_letter(self, bright: bool) -> char {
        let letter = match self {
            BasicColor::Black => 'x',
            BasicColor::Red => 'r',
            BasicColor::Green => 'g',
            BasicColor::Yellow => 'y',
            BasicColor::Blue => 'b',
            BasicColor::Magenta => 'm',
            BasicColor::Cyan => 'c',
            BasicColor::White => 'w',
        };
        if bright { letter } else { letter.to_ascii_uppercase() }
    }
}

/// A color directive's value. See the module docs for the markup that produces each
/// variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkupColor {
    Basic { color: BasicColor, bright: bool },
    /// Digits of the 6×6×6 xterm cube, each in 0..=5.
    Xterm { red: u8, green: u8, blue: u8 },
    /// Greyscale step, 0 (`a`, black) ..= 25 (`z`, white).
    Grey(u8),
    Hex(RgbValue),
}

impl MarkupColor {
    #[must_use]
    pub const fn basic(color: BasicColor, bright: bool) -> Self {
        MarkupColor::Basic { color, bright }
    }

    /// The 0..=5 cube digits nearest to this color. This is the canonical form used when
    /// colors have to be reduced to the basic palette.
    #[must_use]
    pub fn cube_digits(&self) -> (u8, u8, u8) {
        match *self {
            MarkupColor::Xterm { red, green, blue } => (red, green, blue),
            MarkupColor::Grey(step) => {
                let level = grey_step_to_cube_digit(step);
                (level, level, level)
            }
            MarkupColor::Basic { .. } | MarkupColor::Hex(_) => {
                let RgbValue { red, green, blue } = self.as_rgb();
                (
                    nearest_cube_digit(red),
                    nearest_cube_digit(green),
                    nearest_cube_digit(blue),
                )
            }
        }
    }

    /// Reduce this color to the nearest basic color and intensity.
    ///
    /// Works on the 0..=5 cube digits:
    /// - Near-equal channels (all within one step of each other) are a gray, mapped by
    ///   level to a black, white, or bright white tier.
    /// - Otherwise the dominant channels (those within one step of the strongest) pick red,
    ///   green, blue, cyan, magenta, or yellow, and the strength of the strongest channel
    ///   picks normal or bright intensity.
    #[must_use]
    pub fn downsample(&self) -> (BasicColor, bool) {
        if let MarkupColor::Basic { color, bright } = *self {
            return (color, bright);
        }

        let (red, green, blue) = self.cube_digits();
        let max = red.max(green).max(blue);
        let is_dominant = |channel: u8| max - channel <= 1;

        let color = match (is_dominant(red), is_dominant(green), is_dominant(blue)) {
            (true, false, false) => BasicColor::Red,
            (false, true, false) => BasicColor::Green,
            (false, false, true) => BasicColor::Blue,
            (true, true, false) => BasicColor::Yellow,
            (true, false, true) => BasicColor::Magenta,
            (false, true, true) => BasicColor::Cyan,
            _ => return gray_tier(max),
        };

        (color, max >= 3)
    }
}

impl TransformColor for MarkupColor {
    fn as_rgb(&self) -> RgbValue {
        match self {
            MarkupColor::Hex(rgb) => *rgb,
            _ => self.as_ansi().as_rgb(),
        }
    }

    fn as_ansi(&self) -> AnsiValue {
        match *self {
            MarkupColor::Basic { color, bright } => {
                AnsiValue::new(color.palette_index(bright))
            }
            MarkupColor::Xterm { red, green, blue } => {
                AnsiValue::new(cube_index(red, green, blue))
            }
            MarkupColor::Grey(step) => AnsiValue::new(grey_step_to_ansi_index(step)),
            MarkupColor::Hex(rgb) => rgb.as_ansi(),
        }
    }
}

/// `a` is cube black (16), `z` is cube white (231), and `b` ..= `y` are the 24 steps of
/// the grayscale ramp (232 ..= 255).
#[must_use]
pub fn grey_step_to_ansi_index(step: u8) -> u8 {
    match step {
        0 => cube_index(0, 0, 0),
        step if step >= GREY_STEPS - 1 => cube_index(5, 5, 5),
        step => GRAY_RAMP_START_INDEX + step - 1,
    }
}

/// Linear map of 0..=25 onto 0..=5, rounding to the nearest digit.
fn grey_step_to_cube_digit(step: u8) -> u8 {
    let step = u16::from(step.min(GREY_STEPS - 1));
    #[allow(clippy::cast_possible_truncation)]
    let digit = ((step * 5 + 12) / 25) as u8;
    digit
}

fn gray_tier(level: u8) -> (BasicColor, bool) {
    match level {
        0..=1 => (BasicColor::Black, false),
        2..=3 => (BasicColor::White, false),
        _ => (BasicColor::White, true),
    }
}
