// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The markup language and [`MarkupString`], the value type that carries it.
//!
//! Directives start with the escape character (`|` by default):
//!
//! | Directive            | Effect                                       |
//! |----------------------|----------------------------------------------|
//! | `\|n`                | reset all styling                            |
//! | `\|r`, `\|R`, ...    | foreground color (see [`MarkupColor`])       |
//! | `\|[r`, `\|[500`, ...| background color                             |
//! | `\|u` `\|*` `\|^`    | toggle underline, invert, blink              |
//! | `\|/` `\|-` `\|_`    | newline, tab, space                          |
//! | `\|>`                | indent to the tab stop                       |
//! | `\|\|`               | a literal escape character                   |
//! | `\|lc..\|lt..\|le`   | command link (`\|lu` for a URL link)         |
//!
//! [`MarkupColor`]: crate::MarkupColor

// Attach sources.
pub mod atom;
pub mod case_transform;
pub mod markup_code;
pub mod markup_config;
pub mod markup_string;
pub mod padding;
pub mod search;
pub mod slice_engine;
pub mod split_join;
pub mod strip;
pub mod style_collector;
pub mod tokenizer;

// Re-export.
pub use atom::*;
pub use markup_code::*;
pub use markup_config::*;
pub use markup_string::*;
pub use padding::*;
pub use slice_engine::*;
pub use style_collector::*;
pub use tokenizer::*;
