// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_markup
//!
//! A markup-aware text engine for game servers (MUDs and friends). Text carries inline
//! directives for colors, styles, whitespace and clickable links:
//!
//! ```text
//! |rThe |ulever|u is |lcpull lever|ltright here|le.|n
//! ```
//!
//! [`MarkupString`] parses this once into [`Atom`]s and behaves like a string of its
//! *visible* text: its length, indices, slices, splits, case transforms and padding all
//! count only what the reader sees, while the directives travel along with the
//! characters they style.
//!
//! ```
//! use r3bl_markup::MarkupString;
//!
//! let it = MarkupString::new("|relectric |cboogaloo|n");
//! assert_eq!(it.clean(), "electric boogaloo");
//! assert_eq!(it.len(), 17);
//! assert_eq!(it.slice(Some(9), None, None).raw(), "|cboogaloo|n");
//! ```
//!
//! ## Rendering
//!
//! Rendering depends on what the client can display, see [`RenderOptions`]:
//!
//! ```
//! use r3bl_markup::{MarkupString, RenderOptions};
//!
//! let it = MarkupString::new("|relectric |cboogaloo|n");
//! assert_eq!(
//!     it.to_terminal(&RenderOptions::default()),
//!     "\x1b[1;31melectric \x1b[1;36mboogaloo\x1b[0m"
//! );
//! ```
//!
//! - [`TerminalRenderer`] writes ANSI escape sequences, from 16 colors up to truecolor,
//!   with optional MXP or OSC 8 links.
//! - [`HtmlRenderer`] writes HTML fragments for web clients.
//! - Both can share a bounded [`RenderCache`].
//!
//! ## Logging
//!
//! The crate logs with [`tracing`]. Malformed markup is reported at trace level, and
//! [`try_initialize_logging_global()`] sets up a compact stderr subscriber for binaries.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod cli;
pub mod core;
pub mod markup;
pub mod render;

// Re-export.
pub use core::*;
pub use markup::*;
pub use render::*;
