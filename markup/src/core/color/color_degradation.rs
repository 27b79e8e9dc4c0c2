// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Module for color degradation based on what the client can display. See
//! [`degrade_color()`] for details.

use super::{AnsiValue, BasicColor, MarkupColor, RgbValue, TransformColor};
use crate::ColorSupport;

/// A [`MarkupColor`] reduced to something the target can display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DegradedColor {
    Basic { color: BasicColor, bright: bool },
    Ansi(AnsiValue),
    Rgb(RgbValue),
}

/// Degrade a color to the form the given color support level can display.
///
/// | Color       | `Truecolor` | `Ansi256`   | `Ansi16`     | `NoColor` |
/// |-------------|-------------|-------------|--------------|-----------|
/// | basic       | basic       | basic       | basic        | none      |
/// | xterm cube  | palette     | palette     | downsampled  | none      |
/// | greyscale   | palette     | palette     | downsampled  | none      |
/// | hex         | RGB         | palette     | downsampled  | none      |
///
/// Downsampling is described in [`MarkupColor::downsample()`].
///
/// # Examples
///
/// ```
/// use r3bl_markup::{BasicColor, ColorSupport, DegradedColor, MarkupColor, degrade_color};
///
/// let green = MarkupColor::Hex((0, 255, 0).into());
/// assert_eq!(
///     degrade_color(green, ColorSupport::Ansi16),
///     Some(DegradedColor::Basic { color: BasicColor::Green, bright: true })
/// );
/// assert_eq!(degrade_color(green, ColorSupport::NoColor), None);
/// ```
#[must_use]
pub fn degrade_color(color: MarkupColor, color_support: ColorSupport) -> Option<DegradedColor> {
    match (color_support, color) {
        (ColorSupport::NoColor, _) => None,

        (_, MarkupColor::Basic { color, bright }) => {
            Some(DegradedColor::Basic { color, bright })
        }

        (ColorSupport::Ansi16, _) => {
            let (color, bright) = color.downsample();
            Some(DegradedColor::Basic { color, bright })
        }

        (ColorSupport::Truecolor, MarkupColor::Hex(rgb)) => Some(DegradedColor::Rgb(rgb)),

        (ColorSupport::Truecolor | ColorSupport::Ansi256, _) => {
            Some(DegradedColor::Ansi(color.as_ansi()))
        }
    }
}
