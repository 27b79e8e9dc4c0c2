// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Atom, MarkupString};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl MarkupString {
    /// Remove leading and trailing characters, whitespace by default. Style codes next to
    /// the removed text are kept. Whitespace directives (`|_`, `|-`, `|/`, `|>`) are
    /// removed like the characters they stand for. Stripping stops at a link.
    ///
    /// ```
    /// use r3bl_markup::MarkupString;
    ///
    /// let it = MarkupString::new("  |r hello |n ");
    /// assert_eq!(it.strip(None).raw(), "|rhello|n");
    /// ```
    #[must_use]
    pub fn strip(&self, chars: Option<&str>) -> Self {
        let left = strip_side(self.atoms(), chars, Side::Left);
        self.derive(strip_side(&left, chars, Side::Right))
    }

    #[must_use]
    pub fn lstrip(&self, chars: Option<&str>) -> Self {
        self.derive(strip_side(self.atoms(), chars, Side::Left))
    }

    #[must_use]
    pub fn rstrip(&self, chars: Option<&str>) -> Self {
        self.derive(strip_side(self.atoms(), chars, Side::Right))
    }
}

fn strip_side(atoms: &[Atom], chars: Option<&str>, side: Side) -> Vec<Atom> {
    let matches = |ch: char| match chars {
        Some(set) => set.contains(ch),
        None => ch.is_whitespace(),
    };

    let mut acc: Vec<Atom> = Vec::with_capacity(atoms.len());
    let mut stripping = true;

    let ordered: Box<dyn Iterator<Item = &Atom>> = match side {
        Side::Left => Box::new(atoms.iter()),
        Side::Right => Box::new(atoms.iter().rev()),
    };

    for atom in ordered {
        if !stripping {
            acc.push(atom.clone());
            continue;
        }
        match atom {
            Atom::Literal(text) => {
                let trimmed = match side {
                    Side::Left => text.trim_start_matches(matches),
                    Side::Right => text.trim_end_matches(matches),
                };
                if !trimmed.is_empty() {
                    acc.push(Atom::Literal(trimmed.to_string()));
                    stripping = false;
                }
            }
            Atom::Code { code, .. } if code.is_zero_width() => acc.push(atom.clone()),
            Atom::Code { code, .. } if code.clean_text_matches(matches) => {}
            Atom::Code { .. } | Atom::Link { .. } => {
                acc.push(atom.clone());
                stripping = false;
            }
        }
    }

    if side == Side::Right {
        acc.reverse();
    }
    acc
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("  |r hello |n ", "|rhello|n", "|rhello |n ", "  |r hello|n")]
    #[test_case("|_|>x|/|-", "x", "x|/|-", "|_|>x")]
    #[test_case("   ", "", "", "")]
    #[test_case("|r  |n", "|r|n", "|r|n", "|r|n")]
    #[test_case(" |lclook|lt look |le ", "|lclook|lt look |le", "|lclook|lt look |le ", " |lclook|lt look |le")]
    fn test_strip_whitespace(input: &str, both: &str, left: &str, right: &str) {
        let it = MarkupString::new(input);
        assert_eq2!(it.strip(None).raw(), both);
        assert_eq2!(it.lstrip(None).raw(), left);
        assert_eq2!(it.rstrip(None).raw(), right);
    }

    #[test]
    fn test_strip_custom_chars() {
        let it = MarkupString::new("xx|gyxhixy|n");
        assert_eq2!(it.strip(Some("xy")).raw(), "|ghi|n");
        assert_eq2!(it.strip(Some("z")).raw(), "xx|gyxhixy|n");
    }

    #[test]
    fn test_escaped_escape_is_not_whitespace() {
        let it = MarkupString::new("|| a ||");
        assert_eq2!(it.strip(None).raw(), "|| a ||");
        assert_eq2!(it.strip(Some("|")).raw(), " a ");
    }
}
