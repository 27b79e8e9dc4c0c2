// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common_result_and_error;
pub mod decl_macros;
pub mod render_cache;
pub mod sizes;

// Re-export.
pub use common_result_and_error::*;
pub use render_cache::*;
pub use sizes::*;
