// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Searching the clean text. Positions are in characters, the same unit as
//! [`MarkupString::len()`] and slicing.

use super::MarkupString;

impl MarkupString {
    /// Character position of the first occurrence of `needle` in the clean text.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<usize> {
        let clean = self.clean();
        clean.find(needle).map(|at| char_position(clean, at))
    }

    /// Character position of the last occurrence of `needle` in the clean text.
    #[must_use]
    pub fn rfind(&self, needle: &str) -> Option<usize> {
        let clean = self.clean();
        clean.rfind(needle).map(|at| char_position(clean, at))
    }

    /// Number of non-overlapping occurrences. An empty needle matches between every pair
    /// of characters and at both ends.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        if needle.is_empty() {
            return self.len() + 1;
        }
        self.clean().matches(needle).count()
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool { self.clean().contains(needle) }

    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool { self.clean().starts_with(prefix) }

    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool { self.clean().ends_with(suffix) }
}

fn char_position(text: &str, byte_index: usize) -> usize { text[..byte_index].chars().count() }
