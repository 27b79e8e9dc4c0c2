// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Splitting only ever cuts inside literal text. A separator that would straddle a
//! directive or a link is not a match, so codes and links always end up whole in exactly
//! one piece.

use super::{Atom, MarkupString};
use crate::{MarkupError, MarkupResult};

/// Which end splitting starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl MarkupString {
    /// Split on every occurrence of `separator` in literal text.
    ///
    /// ```
    /// use r3bl_markup::MarkupString;
    ///
    /// let it = MarkupString::new("|gThis is |nA split string|g");
    /// let pieces = it.split("A").unwrap();
    /// assert_eq!(pieces[0].raw(), "|gThis is |n");
    /// assert_eq!(pieces[1].raw(), " split string|g");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptySeparator`] if `separator` is empty.
    pub fn split(&self, separator: &str) -> MarkupResult<Vec<Self>> {
        self.split_impl(separator, None, Direction::Forward)
    }

    /// Split at most `max_splits` times, starting from the left.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptySeparator`] if `separator` is empty.
    pub fn splitn(&self, separator: &str, max_splits: usize) -> MarkupResult<Vec<Self>> {
        self.split_impl(separator, Some(max_splits), Direction::Forward)
    }

    /// Split on every occurrence, starting from the right. The pieces are still returned
    /// in left to right order.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptySeparator`] if `separator` is empty.
    pub fn rsplit(&self, separator: &str) -> MarkupResult<Vec<Self>> {
        self.split_impl(separator, None, Direction::Backward)
    }

    /// Split at most `max_splits` times, starting from the right.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptySeparator`] if `separator` is empty.
    pub fn rsplitn(&self, separator: &str, max_splits: usize) -> MarkupResult<Vec<Self>> {
        self.split_impl(separator, Some(max_splits), Direction::Backward)
    }

    /// `(head, separator, tail)` around the first occurrence, or `(self, "", "")`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptySeparator`] if `separator` is empty.
    pub fn partition(&self, separator: &str) -> MarkupResult<(Self, Self, Self)> {
        let mut pieces = self.splitn(separator, 1)?.into_iter();
        match (pieces.next(), pieces.next()) {
            (Some(head), Some(tail)) => Ok((head, self.plain_like(separator), tail)),
            _ => Ok((self.clone(), self.derive(Vec::new()), self.derive(Vec::new()))),
        }
    }

    /// `(head, separator, tail)` around the last occurrence, or `("", "", self)`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::EmptySeparator`] if `separator` is empty.
    pub fn rpartition(&self, separator: &str) -> MarkupResult<(Self, Self, Self)> {
        let mut pieces = self.rsplitn(separator, 1)?.into_iter();
        match (pieces.next(), pieces.next()) {
            (Some(head), Some(tail)) => Ok((head, self.plain_like(separator), tail)),
            _ => Ok((self.derive(Vec::new()), self.derive(Vec::new()), self.clone())),
        }
    }

    /// Concatenate `items` with `self` between each pair. Plain strings are parsed first.
    /// Literal text on either side of a junction is merged, same as `+`.
    ///
    /// ```
    /// use r3bl_markup::MarkupString;
    ///
    /// let separator = MarkupString::new("|n, ");
    /// let joined = separator.join(["|rred", "|ggreen"]);
    /// assert_eq!(joined.raw(), "|rred|n, |ggreen");
    /// ```
    #[must_use]
    pub fn join<I, T>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<MarkupString>,
    {
        let mut acc: Vec<Atom> = Vec::new();
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                acc.extend(self.atoms().iter().cloned());
            }
            let item: MarkupString = item.into();
            acc.extend(item.atoms().iter().cloned());
        }
        self.derive(acc)
    }

    fn split_impl(
        &self,
        separator: &str,
        max_splits: Option<usize>,
        direction: Direction,
    ) -> MarkupResult<Vec<Self>> {
        if separator.is_empty() {
            return Err(MarkupError::EmptySeparator);
        }

        let mut remaining = max_splits.unwrap_or(usize::MAX);
        let mut pieces: Vec<Vec<Atom>> = Vec::new();
        let mut current: Vec<Atom> = Vec::new();

        let atoms: Box<dyn Iterator<Item = &Atom>> = match direction {
            Direction::Forward => Box::new(self.atoms().iter()),
            Direction::Backward => Box::new(self.atoms().iter().rev()),
        };

        for atom in atoms {
            let Atom::Literal(text) = atom else {
                current.push(atom.clone());
                continue;
            };

            let mut rest = text.as_str();
            while remaining > 0 {
                let found = match direction {
                    Direction::Forward => rest.find(separator),
                    Direction::Backward => rest.rfind(separator),
                };
                let Some(at) = found else {
                    break;
                };
                remaining -= 1;
                let (before, after) = (&rest[..at], &rest[at + separator.len()..]);
                match direction {
                    Direction::Forward => {
                        current.push(Atom::Literal(before.to_string()));
                        pieces.push(std::mem::take(&mut current));
                        rest = after;
                    }
                    Direction::Backward => {
                        current.push(Atom::Literal(after.to_string()));
                        pieces.push(std::mem::take(&mut current));
                        rest = before;
                    }
                }
            }
            current.push(Atom::Literal(rest.to_string()));
        }
        pieces.push(current);

        if direction == Direction::Backward {
            pieces.reverse();
            for piece in &mut pieces {
                piece.reverse();
            }
        }

        Ok(pieces.into_iter().map(|atoms| self.derive(atoms)).collect())
    }
}
