// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operating System Command (OSC) codes for terminal hyperlinks.
//!
//! ## Structure
//! OSC sequences follow the pattern: `ESC ] code ; parameters ST`
//! - Start with ESC (0x1B) followed by `]`
//! - Numeric code identifying the command type
//! - Parameters separated by `;`
//! - End with String Terminator (ESC \\) or BEL (0x07)
//!
//! ## Example
//! - `ESC]8;;https://example.com BEL Link Text ESC]8;; BEL` - Create hyperlink

use std::fmt::{Display, Formatter, Result};

/// Generic OSC sequence start: ESC ]
pub const OSC_START: &str = "\x1b]";
/// OSC 8 hyperlink sequence prefix: ESC ] 8 ; ;
pub const OSC8_START: &str = "\x1b]8;;";
/// Sequence terminator: ESC \\ (String Terminator)
pub const END: &str = "\x1b\\";
/// Alternative terminator: BEL character (0x07). Hyperlinks use this one, since more
/// terminals accept it.
pub const BELL_TERMINATOR: &str = "\x07";

/// OSC sequences this crate emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OscSequence {
    /// Opens a hyperlink. `id` groups several ranges into one link.
    HyperlinkStart { uri: String, id: Option<String> },
    HyperlinkEnd,
}

impl Display for OscSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            OscSequence::HyperlinkStart { uri, id: None } => {
                write!(f, "{OSC8_START}{uri}{BELL_TERMINATOR}")
            }
            OscSequence::HyperlinkStart { uri, id: Some(id) } => {
                write!(f, "{OSC_START}8;id={id};{uri}{BELL_TERMINATOR}")
            }
            OscSequence::HyperlinkEnd => write!(f, "{OSC8_START}{BELL_TERMINATOR}"),
        }
    }
}
