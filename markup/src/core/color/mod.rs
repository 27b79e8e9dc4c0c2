// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor) and [`AnsiValue`] (256-color
//!   palette)
//! - **Abstraction**: [`TransformColor`] trait for color representation conversion
//! - **Markup colors**: [`MarkupColor`], the value of a color directive
//! - **Degradation**: [`degrade_color()`] reduces a [`MarkupColor`] to what a client can
//!   display

// Attach.
mod ansi_value;
mod color_degradation;
mod convert;
mod markup_color;
mod rgb_value;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use color_degradation::*;
pub use convert::*;
pub use markup_color::*;
pub use rgb_value::*;
pub use transform_color::*;
