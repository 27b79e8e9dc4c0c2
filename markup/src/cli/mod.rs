// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cli_arg;

// Re-export.
pub use cli_arg::*;
