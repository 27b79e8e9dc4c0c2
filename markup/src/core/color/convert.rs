// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between the xterm 256-color palette and RGB.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//!
//! ```text
//!   0..=7     standard colors
//!   8..=15    high intensity colors
//!  16..=231   6 × 6 × 6 cube, index = 16 + 36 × r + 6 × g + b (r, g, b in 0..=5)
//! 232..=255   grayscale ramp from 8 to 238 in steps of 10
//! ```

use super::{AnsiValue, RgbValue};

/// Channel intensities of the six levels of the xterm color cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First palette index of the color cube.
pub const CUBE_START_INDEX: u8 = 16;

/// First palette index of the grayscale ramp.
pub const GRAY_RAMP_START_INDEX: u8 = 232;

/// Number of steps in the grayscale ramp.
pub const GRAY_RAMP_STEPS: u8 = 24;

/// RGB values of the 16 standard and high intensity colors, in palette order.
#[rustfmt::skip]
pub const BASIC_COLOR_PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // 0 Black
    (128, 0, 0),     // 1 Red
    (0, 128, 0),     // 2 Green
    (128, 128, 0),   // 3 Yellow
    (0, 0, 128),     // 4 Blue
    (128, 0, 128),   // 5 Magenta
    (0, 128, 128),   // 6 Cyan
    (192, 192, 192), // 7 White
    (128, 128, 128), // 8 Bright Black
    (255, 0, 0),     // 9 Bright Red
    (0, 255, 0),     // 10 Bright Green
    (255, 255, 0),   // 11 Bright Yellow
    (0, 0, 255),     // 12 Bright Blue
    (255, 0, 255),   // 13 Bright Magenta
    (0, 255, 255),   // 14 Bright Cyan
    (255, 255, 255), // 15 Bright White
];

/// Returns the cube digit (0..=5) whose level is nearest to `value`.
#[must_use]
pub fn nearest_cube_digit(value: u8) -> u8 {
    let mut best_digit = 0;
    let mut best_distance = u8::MAX;
    for (digit, level) in (0_u8..).zip(CUBE_LEVELS) {
        let distance = value.abs_diff(level);
        if distance < best_distance {
            best_distance = distance;
            best_digit = digit;
        }
    }
    best_digit
}

/// Palette index of a cube color with the given digits (each 0..=5).
#[must_use]
pub fn cube_index(red: u8, green: u8, blue: u8) -> u8 {
    debug_assert!(red < 6 && green < 6 && blue < 6, "cube digits must be 0..=5");
    CUBE_START_INDEX + 36 * red + 6 * green + blue
}

/// Convert a palette index to its RGB value.
#[must_use]
pub fn convert_ansi256_into_rgb(index: u8) -> RgbValue {
    match index {
        0..=15 => BASIC_COLOR_PALETTE[usize::from(index)].into(),
        16..=231 => {
            let offset = index - CUBE_START_INDEX;
            let red = CUBE_LEVELS[usize::from(offset / 36)];
            let green = CUBE_LEVELS[usize::from((offset % 36) / 6)];
            let blue = CUBE_LEVELS[usize::from(offset % 6)];
            (red, green, blue).into()
        }
        _ => {
            let gray = 8 + 10 * (index - GRAY_RAMP_START_INDEX);
            (gray, gray, gray).into()
        }
    }
}

/// Find the palette index (16..=255) nearest to the given RGB value. Both the nearest
/// cube color and the nearest gray ramp color are considered, and the closer one wins
/// (ties go to the cube).
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    let RgbValue { red, green, blue } = rgb;

    let cube = (
        nearest_cube_digit(red),
        nearest_cube_digit(green),
        nearest_cube_digit(blue),
    );
    let cube_index = cube_index(cube.0, cube.1, cube.2);
    let cube_distance = distance_squared(rgb, convert_ansi256_into_rgb(cube_index));

    let average = (u16::from(red) + u16::from(green) + u16::from(blue)) / 3;
    let gray_step = (average.saturating_sub(3) / 10).min(u16::from(GRAY_RAMP_STEPS - 1));
    #[allow(clippy::cast_possible_truncation)]
    let gray_index = GRAY_RAMP_START_INDEX + gray_step as u8;
    let gray_distance = distance_squared(rgb, convert_ansi256_into_rgb(gray_index));

    if gray_distance < cube_distance {
        AnsiValue::new(gray_index)
    } else {
        AnsiValue::new(cube_index)
    }
}

fn distance_squared(lhs: RgbValue, rhs: RgbValue) -> u32 {
    let channel = |a: u8, b: u8| {
        let it = u32::from(a.abs_diff(b));
        it * it
    };
    channel(lhs.red, rhs.red) + channel(lhs.green, rhs.green) + channel(lhs.blue, rhs.blue)
}
