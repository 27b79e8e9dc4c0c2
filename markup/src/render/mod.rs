// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Output backends. Both walk the [`Run`](crate::Run)s of a
//! [`MarkupString`](crate::MarkupString):
//! - [`TerminalRenderer`] writes ANSI escape sequences, degrading colors to what the
//!   client supports, with optional MXP or OSC 8 links.
//! - [`HtmlRenderer`] writes an HTML fragment with css classes and anchors.

// Attach sources.
pub mod html_renderer;
pub mod render_api;
pub mod render_options;
pub mod terminal_renderer;

// Re-export.
pub use html_renderer::*;
pub use render_options::*;
pub use terminal_renderer::*;
