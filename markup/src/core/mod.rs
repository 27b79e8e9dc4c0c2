// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi;
pub mod color;
pub mod common;
pub mod log;
pub mod osc;

// Re-export.
pub use ansi::*;
pub use color::*;
pub use common::*;
pub use log::*;
pub use osc::*;
