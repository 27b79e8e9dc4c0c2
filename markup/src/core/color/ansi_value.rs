// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! This provides a good balance between color precision and terminal compatibility.
//! Each index (0-255) maps to a specific color in the palette.

use super::{RgbValue, convert::convert_ansi256_into_rgb};
use crate::TransformColor;

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { convert_ansi256_into_rgb(self.index) }

    fn as_ansi(&self) -> AnsiValue { *self }
}

impl AnsiValue {
    /// Create a new ANSI color value.
    #[must_use]
    pub const fn new(color: u8) -> Self { Self { index: color } }

    /// Check if this is a basic ANSI color (indices 0-15).
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }

    /// Check if this is an extended ANSI color (indices 16-255): the 6×6×6 cube and the
    /// grayscale ramp.
    #[must_use]
    pub const fn is_extended(&self) -> bool { !self.is_basic() }
}
