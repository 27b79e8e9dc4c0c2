// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Case transforms work on the clean text, then thread the result back through the
//! original atoms by visible position. Codes and links stay where they are and the
//! length never changes: a character whose mapping is not exactly one character (like
//! `ß` to `SS`) is left as is.

use super::{Atom, MarkupString};

impl MarkupString {
    #[must_use]
    pub fn upper(&self) -> Self {
        self.map_clean(|chars| chars.iter().map(|&c| to_upper(c)).collect())
    }

    #[must_use]
    pub fn lower(&self) -> Self {
        self.map_clean(|chars| chars.iter().map(|&c| to_lower(c)).collect())
    }

    #[must_use]
    pub fn swapcase(&self) -> Self {
        self.map_clean(|chars| {
            chars
                .iter()
                .map(|&c| {
                    if c.is_uppercase() {
                        to_lower(c)
                    } else if c.is_lowercase() {
                        to_upper(c)
                    } else {
                        c
                    }
                })
                .collect()
        })
    }

    /// First character upper case, the rest lower case.
    #[must_use]
    pub fn capitalize(&self) -> Self {
        self.map_clean(|chars| {
            chars
                .iter()
                .enumerate()
                .map(|(index, &c)| if index == 0 { to_upper(c) } else { to_lower(c) })
                .collect()
        })
    }

    /// Upper case after every non-letter, lower case elsewhere.
    ///
    /// ```
    /// use r3bl_markup::MarkupString;
    ///
    /// let it = MarkupString::new("the |rgREAT|n hall");
    /// assert_eq!(it.title().raw(), "The |rGreat|n Hall");
    /// ```
    #[must_use]
    pub fn title(&self) -> Self {
        self.map_clean(|chars| {
            let mut previous_is_letter = false;
            chars
                .iter()
                .map(|&c| {
                    let it = if !c.is_alphabetic() {
                        c
                    } else if previous_is_letter {
                        to_lower(c)
                    } else {
                        to_upper(c)
                    };
                    previous_is_letter = c.is_alphabetic();
                    it
                })
                .collect()
        })
    }

    fn map_clean(&self, transform: impl FnOnce(&[char]) -> Vec<char>) -> Self {
        let chars: Vec<char> = self.clean().chars().collect();
        let mapped = transform(&chars);
        debug_assert_eq!(mapped.len(), chars.len());
        self.rethread(&mapped)
    }

    /// Replace the visible characters of literal atoms with `chars`, by position.
    fn rethread(&self, chars: &[char]) -> Self {
        let mut position = 0;
        let mut acc = Vec::with_capacity(self.atoms().len());
        for atom in self.atoms() {
            let width = atom.visible_width();
            let end = (position + width).min(chars.len());
            let replacement = &chars[position.min(end)..end];
            let it = match atom {
                Atom::Literal(_) => Atom::Literal(replacement.iter().collect()),
                Atom::Code { .. } => atom.clone(),
                Atom::Link {
                    kind,
                    payload,
                    inner,
                    escape_char,
                } => Atom::Link {
                    kind: *kind,
                    payload: payload.clone(),
                    inner: inner.rethread(replacement),
                    escape_char: *escape_char,
                },
            };
            acc.push(it);
            position += width;
        }
        self.derive(acc)
    }
}

fn to_upper(c: char) -> char { single(c.to_uppercase()).unwrap_or(c) }

fn to_lower(c: char) -> char { single(c.to_lowercase()).unwrap_or(c) }

fn single(mut it: impl Iterator<Item = char>) -> Option<char> {
    let first = it.next()?;
    it.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("|rhello |gWorld|n", "|rHELLO |gWORLD|n")]
    #[test_case("straße", "STRAßE")]
    #[test_case("a|_b||c", "A|_B||C")]
    fn test_upper(input: &str, expected: &str) {
        let it = MarkupString::new(input);
        let upper = it.upper();
        assert_eq2!(upper.raw(), expected);
        assert_eq2!(upper.len(), it.len());
    }

    #[test]
    fn test_lower_and_swapcase() {
        let it = MarkupString::new("|rHeLLo|n");
        assert_eq2!(it.lower().raw(), "|rhello|n");
        assert_eq2!(it.swapcase().raw(), "|rhEllO|n");
    }

    #[test]
    fn test_capitalize_across_codes() {
        let it = MarkupString::new("|rhELLO |gTHERE");
        assert_eq2!(it.capitalize().raw(), "|rHello |gthere");
    }

    #[test]
    fn test_title_treats_digits_as_word_breaks() {
        let it = MarkupString::new("1st |rplace's");
        assert_eq2!(it.title().raw(), "1St |rPlace'S");
    }

    #[test]
    fn test_link_text_is_transformed_in_place() {
        let it = MarkupString::new("go |lclook|lt|rthe box|le now");
        let upper = it.upper();
        assert_eq2!(upper.raw(), "GO |lclook|lt|rTHE BOX|le NOW");
        assert_eq2!(upper.len(), it.len());
    }
}
