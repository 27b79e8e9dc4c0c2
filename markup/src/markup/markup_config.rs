// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The default markup escape character.
pub const DEFAULT_ESCAPE_CHAR: char = '|';

/// The default width of the `|>` indent directive.
pub const DEFAULT_TAB_STOP: u8 = 4;

/// Settings that change how raw text is tokenized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkupConfig {
    /// Reserved character that introduces a directive.
    pub escape_char: char,
    /// Number of spaces an indent directive stands for.
    pub tab_stop: u8,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            escape_char: DEFAULT_ESCAPE_CHAR,
            tab_stop: DEFAULT_TAB_STOP,
        }
    }
}

impl MarkupConfig {
    #[must_use]
    pub const fn new(escape_char: char, tab_stop: u8) -> Self {
        Self {
            escape_char,
            tab_stop,
        }
    }

    #[must_use]
    pub const fn with_escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = escape_char;
        self
    }

    #[must_use]
    pub const fn with_tab_stop(mut self, tab_stop: u8) -> Self {
        self.tab_stop = tab_stop;
        self
    }
}
