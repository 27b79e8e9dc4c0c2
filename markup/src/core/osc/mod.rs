// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Clickable link escapes: OSC 8 hyperlinks and MXP tags.

// Attach.
pub mod mxp_link;
pub mod osc_codes;
pub mod osc_hyperlink;

// Re-export.
pub use mxp_link::*;
pub use osc_codes::*;
pub use osc_hyperlink::*;
