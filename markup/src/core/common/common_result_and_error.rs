// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Malformed markup is never an error, it is echoed back as literal text. The errors in
//! this module are only raised for programmer mistakes, like indexing past the end of a
//! [`crate::MarkupString`] or passing a bad format spec to [`crate::MarkupString::pad`].

/// Type alias to make it easy to work with [`MarkupError`]. Use `?` to convert it into a
/// [`miette::Report`] in binaries.
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors raised synchronously by [`crate::MarkupString`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum MarkupError {
    #[error("Index {index} is out of range for markup string of length {len}")]
    #[diagnostic(
        code(r3bl_markup::index_out_of_range),
        help("Negative indexes count from the end, valid range is -len..len")
    )]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Fill '{fill}' must be exactly one character")]
    #[diagnostic(code(r3bl_markup::invalid_fill))]
    InvalidFill { fill: String },

    #[error("Width '{width}' is not a valid non-negative integer")]
    #[diagnostic(code(r3bl_markup::invalid_width))]
    InvalidWidth { width: String },

    #[error("Unsupported format spec '{spec}'")]
    #[diagnostic(
        code(r3bl_markup::invalid_format_spec),
        help("Use [[fill]align][width] where align is one of '<', '>' or '^'")
    )]
    InvalidFormatSpec { spec: String },

    #[error("Separator must not be empty")]
    #[diagnostic(code(r3bl_markup::empty_separator))]
    EmptySeparator,
}
