// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Slicing by visible character position, keeping the styling that applies to the
//! selected characters.
//!
//! The walk visits atoms in traversal order (reversed for a negative step):
//! - Style codes and empty links are staged in a pending buffer that only keeps what still has an effect
//!   (a reset clears its codes, a later color replaces an earlier one of the same kind, and a
//!   repeated toggle cancels out).
//! - Before each visible atom that contributes characters, the pending buffer is flushed.
//! - After the last selected character, style codes that directly follow it are kept too
//!   (usually a closing reset), but only when that character is the last one of its atom.
//!
//! Empty results keep one asymmetry: `s[:k]` returns the leading style codes and `s[k:]`
//! the trailing ones, while any other empty slice has no atoms at all.

use super::{Atom, MarkupCode, MarkupString};
use crate::{MarkupError, MarkupResult};

/// Slice bounds normalized against a length, like ordinary slicing does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceSelection {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
}

impl SliceSelection {
    /// Returns [`None`] for a zero step.
    #[must_use]
    pub fn new(
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
        len: usize,
    ) -> Option<Self> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return None;
        }
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |index: isize| {
            if index < 0 {
                (index + len).max(lower)
            } else {
                index.min(upper)
            }
        };

        let start = start.map_or(if step > 0 { lower } else { upper }, clamp);
        let stop = stop.map_or(if step > 0 { upper } else { lower }, clamp);
        Some(Self { start, stop, step })
    }

    /// The selected positions, in traversal order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        let mut acc = Vec::new();
        let mut index = self.start;
        while (self.step > 0 && index < self.stop) || (self.step < 0 && index > self.stop) {
            if let Ok(it) = usize::try_from(index) {
                acc.push(it);
            }
            match index.checked_add(self.step) {
                Some(next) => index = next,
                None => break,
            }
        }
        acc
    }
}

impl MarkupString {
    /// Equivalent of `s[start:stop:step]`. Never fails, degenerate ranges give an empty
    /// result.
    ///
    /// ```
    /// use r3bl_markup::MarkupString;
    ///
    /// let it = MarkupString::new("A |rTest|n string");
    /// let sliced = it.slice(Some(2), Some(6), None);
    /// assert_eq!(sliced.clean(), "Test");
    /// assert_eq!(sliced.raw(), "|rTest|n");
    /// ```
    #[must_use]
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        let Some(selection) = SliceSelection::new(start, stop, step, self.len()) else {
            return self.derive(Vec::new());
        };

        let indices = selection.indices();
        if indices.is_empty() {
            return self.derive(self.empty_slice_edge(start, stop, selection.step));
        }

        self.derive(self.walk(&indices, selection.step))
    }

    /// Single character at `index` (negative counts from the end), with the styling that
    /// applies to it.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::IndexOutOfRange`] outside `-len..len`.
    pub fn index(&self, index: isize) -> MarkupResult<Self> {
        let position = self.normalize_index(index)?;
        let position = isize::try_from(position).unwrap_or(isize::MAX);
        Ok(self.slice(Some(position), Some(position + 1), None))
    }

    /// The clean character at `index` (negative counts from the end).
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::IndexOutOfRange`] outside `-len..len`.
    pub fn char_at(&self, index: isize) -> MarkupResult<char> {
        let position = self.normalize_index(index)?;
        self.clean()
            .chars()
            .nth(position)
            .ok_or(MarkupError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    fn normalize_index(&self, index: isize) -> MarkupResult<usize> {
        let len = self.len();
        let error = MarkupError::IndexOutOfRange { index, len };
        let signed_len = isize::try_from(len).map_err(|_| error.clone())?;
        let position = if index < 0 { index + signed_len } else { index };
        match usize::try_from(position) {
            Ok(it) if it < len => Ok(it),
            _ => Err(error),
        }
    }

    fn empty_slice_edge(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    ) -> Vec<Atom> {
        if step < 0 {
            return Vec::new();
        }
        let atoms = self.atoms();
        match (start, stop) {
            (None, Some(_)) => atoms
                .iter()
                .take_while(|atom| atom.is_zero_width())
                .filter(|atom| atom.is_marker())
                .cloned()
                .collect(),
            (Some(_), None) => {
                let mut acc: Vec<Atom> = atoms
                    .iter()
                    .rev()
                    .take_while(|atom| atom.is_zero_width())
                    .filter(|atom| atom.is_marker())
                    .cloned()
                    .collect();
                acc.reverse();
                acc
            }
            _ => Vec::new(),
        }
    }

    fn walk(&self, indices: &[usize], step: isize) -> Vec<Atom> {
        let atoms = self.atoms();

        let mut positions = Vec::with_capacity(atoms.len());
        let mut running = 0;
        for atom in atoms {
            positions.push(running);
            running += atom.visible_width();
        }

        let order: Vec<usize> = if step > 0 {
            (0..atoms.len()).collect()
        } else {
            (0..atoms.len()).rev().collect()
        };

        let mut acc = Vec::new();
        let mut pending: Vec<Atom> = Vec::new();
        let mut cursor = 0;
        let mut traversal = order.into_iter();

        while let Some(atom_index) = traversal.next() {
            let atom = &atoms[atom_index];
            let width = atom.visible_width();
            if width == 0 {
                if atom.is_marker() {
                    stage(&mut pending, atom);
                }
                continue;
            }

            let range = positions[atom_index]..positions[atom_index] + width;
            let begin = cursor;
            while cursor < indices.len() && range.contains(&indices[cursor]) {
                cursor += 1;
            }
            if begin == cursor {
                continue;
            }

            let local: Vec<usize> = indices[begin..cursor]
                .iter()
                .map(|index| index - range.start)
                .collect();
            acc.append(&mut pending);
            acc.push(slice_atom(atom, &local, step));

            if cursor == indices.len() {
                let last = local[local.len() - 1];
                let at_boundary = if step > 0 { last + 1 == width } else { last == 0 };
                if at_boundary {
                    for trailing_index in traversal.by_ref() {
                        let trailing = &atoms[trailing_index];
                        if !trailing.is_zero_width() {
                            break;
                        }
                        if trailing.is_marker() {
                            acc.push(trailing.clone());
                        }
                    }
                }
                break;
            }
        }

        acc
    }
}

/// Add a style code or empty link to the pending buffer, keeping only what still has an
/// effect.
fn stage(pending: &mut Vec<Atom>, atom: &Atom) {
    let Atom::Code { code, .. } = atom else {
        pending.push(atom.clone());
        return;
    };
    match code {
        MarkupCode::Reset => pending.retain(|it| matches!(it, Atom::Link { .. })),
        MarkupCode::Fg(_) => {
            pending.retain(|it| !matches!(it, Atom::Code { code: MarkupCode::Fg(_), .. }));
        }
        MarkupCode::Bg(_) => {
            pending.retain(|it| !matches!(it, Atom::Code { code: MarkupCode::Bg(_), .. }));
        }
        MarkupCode::Underline | MarkupCode::Invert | MarkupCode::Blink => {
            if let Some(found) = pending.iter().position(|it| it == atom) {
                pending.remove(found);
                return;
            }
        }
        _ => {}
    }
    pending.push(atom.clone());
}

/// The part of a visible atom at `local` offsets (relative to the atom's first visible
/// position), in traversal order.
fn slice_atom(atom: &Atom, local: &[usize], step: isize) -> Atom {
    match atom {
        Atom::Literal(text) => {
            let chars: Vec<char> = text.chars().collect();
            Atom::Literal(local.iter().map(|&index| chars[index]).collect())
        }
        Atom::Code { .. } if local.len() == atom.visible_width() => atom.clone(),
        Atom::Code { .. } => Atom::Literal(" ".repeat(local.len())),
        Atom::Link {
            kind,
            payload,
            inner,
            escape_char,
        } => {
            let first = local[0];
            let last = local[local.len() - 1];
            let to_isize = |it: usize| isize::try_from(it).unwrap_or(isize::MAX);
            let stop = if step > 0 {
                Some(to_isize(last + 1))
            } else if last == 0 {
                None
            } else {
                Some(to_isize(last - 1))
            };
            Atom::Link {
                kind: *kind,
                payload: payload.clone(),
                inner: inner.slice(Some(to_isize(first)), stop, Some(step)),
                escape_char: *escape_char,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn reference_slice(
        text: &str,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> String {
        let chars: Vec<char> = text.chars().collect();
        SliceSelection::new(start, stop, step, chars.len())
            .map(|it| it.indices().into_iter().map(|index| chars[index]).collect())
            .unwrap_or_default()
    }

    #[test_case(None, None, None, 0, 5, 1)]
    #[test_case(Some(-2), None, None, 3, 5, 1)]
    #[test_case(Some(-10), Some(10), None, 0, 5, 1)]
    #[test_case(None, None, Some(-1), 4, -1, -1)]
    #[test_case(Some(10), Some(-10), Some(-2), 4, -1, -2)]
    fn test_selection_normalization(
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
        expected_start: isize,
        expected_stop: isize,
        expected_step: isize,
    ) {
        assert_eq2!(
            SliceSelection::new(start, stop, step, 5),
            Some(SliceSelection {
                start: expected_start,
                stop: expected_stop,
                step: expected_step,
            })
        );
    }

    #[test]
    fn test_zero_step_is_empty() {
        let it = MarkupString::new("|rabc");
        assert!(it.slice(None, None, Some(0)).atoms().is_empty());
    }

    #[test]
    fn test_slice_keeps_style_context() {
        let it = MarkupString::new("A |rTest|n string");
        let sliced = it.slice(Some(2), Some(6), None);
        assert_eq2!(sliced.clean(), "Test");
        assert_eq2!(sliced.raw(), "|rTest|n");
    }

    #[test]
    fn test_closing_codes_need_atom_boundary() {
        let it = MarkupString::new("|rTest|n rest");
        assert_eq2!(it.slice(Some(0), Some(3), None).raw(), "|rTes");
        assert_eq2!(it.slice(Some(0), Some(4), None).raw(), "|rTest|n");
    }

    #[test]
    fn test_pending_keeps_only_effective_codes() {
        let it = MarkupString::new("|ra|gb|n|u|uc|[rd");
        // A later foreground replaces an earlier one.
        assert_eq2!(it.slice(Some(1), Some(2), None).raw(), "|gb|n|u|u");
        // The reset clears the colors and the two underline toggles cancel out.
        assert_eq2!(it.slice(Some(2), Some(3), None).raw(), "|nc|[r");
        assert_eq2!(it.slice(Some(3), None, None).raw(), "|n|[rd");
    }

    #[test]
    fn test_reverse_slice() {
        let it = MarkupString::new("|rab|gcd|n");
        let reversed = it.slice(None, None, Some(-1));
        assert_eq2!(reversed.clean(), "dcba");
        assert_eq2!(reversed.raw(), "|ndc|gba|r");
    }

    #[test]
    fn test_step_two() {
        let it = MarkupString::new("|ra|gbc|bde");
        let sliced = it.slice(None, None, Some(2));
        assert_eq2!(sliced.clean(), "ace");
        assert_eq2!(sliced.raw(), "|ra|gc|be");
    }

    #[test]
    fn test_empty_head_and_tail_asymmetry() {
        let it = MarkupString::new("|r|uabc|n");
        assert_eq2!(it.slice(None, Some(0), None).raw(), "|r|u");
        assert_eq2!(it.slice(Some(3), None, None).raw(), "|n");
        assert_eq2!(it.slice(Some(1), Some(1), None).raw(), "");
        assert_eq2!(it.slice(Some(10), Some(20), None).raw(), "");
    }

    #[test]
    fn test_partial_indent_becomes_spaces() {
        let it = MarkupString::new("a|>b");
        let sliced = it.slice(Some(1), Some(3), None);
        assert_eq2!(sliced.clean(), "  ");
        assert_eq2!(sliced.raw(), "  ");
        assert_eq2!(it.slice(Some(1), Some(5), None).raw(), "|>");
    }

    #[test]
    fn test_partial_link_slices_inner_text() {
        let it = MarkupString::new("x|lclook|lt|gabc|le");
        let sliced = it.slice(Some(2), None, None);
        assert_eq2!(sliced.clean(), "bc");
        assert_eq2!(sliced.raw(), "|lclook|lt|gbc|le");

        let reversed = it.slice(None, None, Some(-1));
        assert_eq2!(reversed.clean(), "cbax");
    }

    #[test]
    fn test_slice_matches_reference_for_all_bounds() {
        let inputs = [
            "|relectric |cboogaloo|n",
            "a|_b|>c||d|/e",
            "pre |lclook|lt|rthe|n box|le post",
            "|[#00ff00héllo|n wörld",
        ];
        let bounds = [None, Some(-20), Some(-3), Some(-1), Some(0), Some(1), Some(4), Some(30)];
        let steps = [None, Some(-3), Some(-1), Some(2)];
        for input in inputs {
            let it = MarkupString::new(input);
            for start in bounds {
                for stop in bounds {
                    for step in steps {
                        assert_eq2!(
                            it.slice(start, stop, step).clean(),
                            reference_slice(it.clean(), start, stop, step),
                            "input {input:?}, slice [{start:?}:{stop:?}:{step:?}]"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_index_and_char_at() {
        let it = MarkupString::new("|rab|gc");
        assert_eq2!(it.char_at(0), Ok('a'));
        assert_eq2!(it.char_at(-1), Ok('c'));
        assert_eq2!(it.index(-1).map(|it| it.raw().to_string()), Ok("|gc".to_string()));
        assert_eq2!(
            it.char_at(3),
            Err(MarkupError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq2!(
            it.index(-4),
            Err(MarkupError::IndexOutOfRange { index: -4, len: 3 })
        );
    }

    #[test]
    fn test_extreme_steps_do_not_overflow() {
        let it = MarkupString::new("|rabc");
        assert_eq2!(it.slice(Some(1), None, Some(isize::MAX)).raw(), "|rb");
        assert_eq2!(it.slice(None, None, Some(isize::MIN)).raw(), "c");
        assert_eq2!(it.slice(Some(-1), Some(isize::MIN), Some(isize::MIN)).clean(), "c");
        assert_eq2!(
            SliceSelection::new(Some(isize::MAX), None, Some(isize::MAX), 3)
                .map(|it| it.indices()),
            Some(vec![])
        );
    }

    #[test]
    fn test_empty_link_is_carried_like_a_style_code() {
        let it = MarkupString::new("|lcx|lt|leab|n");
        assert_eq2!(it.slice(Some(0), None, None).raw(), "|lcx|lt|leab|n");
        assert_eq2!(it.slice(Some(1), None, None).raw(), "|lcx|lt|leb|n");
        assert_eq2!(it.slice(None, Some(0), None).raw(), "|lcx|lt|le");

        let it = MarkupString::new("|r|lcx|lt|le|nab");
        assert_eq2!(it.slice(Some(0), Some(1), None).raw(), "|lcx|lt|le|na");
    }
}
