// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where log output is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

/// Configure the tracing logging to suit your needs. Rendered output goes to stdout, so
/// logs default to stderr at the `WARN` level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TracingConfig {
    pub display_preference: DisplayPreference,
    pub level_filter: LevelFilter,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            display_preference: DisplayPreference::default(),
            level_filter: LevelFilter::WARN,
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_display_preference(&self) -> DisplayPreference { self.display_preference }
}
