// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod detect_color_support;
mod sgr_code;

// Re-export.
pub use detect_color_support::*;
pub use sgr_code::*;
