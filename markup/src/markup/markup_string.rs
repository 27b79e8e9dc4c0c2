// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`MarkupString`] is the immutable value type at the center of this crate. It keeps
//! two views of the same text in sync:
//!
//! | View                          | Contents                                        |
//! |-------------------------------|-------------------------------------------------|
//! | [`raw()`](MarkupString::raw)     | text with directives, as stored and transmitted |
//! | [`clean()`](MarkupString::clean) | text the reader sees, directives removed        |
//!
//! Every string-like operation (slicing, splitting, joining, stripping, case transforms,
//! concatenation) works on the atom sequence, so styling survives the operation. Both
//! views and the visible length are computed on first use and cached.

use std::{cmp::Ordering,
          fmt::{self, Debug},
          hash::{Hash, Hasher},
          ops::{Add, AddAssign},
          sync::OnceLock};

use super::{Atom, LinkKind, MarkupConfig, tokenize};

#[derive(Clone, Default)]
pub struct MarkupString {
    atoms: Vec<Atom>,
    config: MarkupConfig,
    clean: OnceLock<String>,
    raw: OnceLock<String>,
    len: OnceLock<usize>,
}

/// A link found by [`MarkupString::links()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkRef<'a> {
    pub kind: LinkKind,
    pub payload: &'a str,
    pub text: &'a MarkupString,
}

mod construct {
    use super::*;

    impl MarkupString {
        /// Parse `raw` with the default [`MarkupConfig`].
        #[must_use]
        pub fn new(raw: &str) -> Self { Self::with_config(raw, MarkupConfig::default()) }

        /// Parse `raw` with a custom escape character or tab stop.
        #[must_use]
        pub fn with_config(raw: &str, config: MarkupConfig) -> Self {
            let it = Self::from_atoms(tokenize(raw, &config), config);
            // The input is the raw form, no need to rebuild it.
            _ = it.raw.set(raw.to_string());
            it
        }

        /// Text that is never parsed for directives. Escape characters in it are doubled
        /// in [`raw()`](MarkupString::raw), so the raw form parses back to the same text.
        #[must_use]
        pub fn literal(text: &str) -> Self {
            let config = MarkupConfig::default();
            Self::from_atoms(Atom::plain_text(text, config.escape_char), config)
        }

        /// Build from atoms. Adjacent literals are merged and empty literals dropped. A
        /// link nested in the text of another link is replaced by its own text.
        #[must_use]
        pub fn from_atoms(atoms: Vec<Atom>, config: MarkupConfig) -> Self {
            Self {
                atoms: merge_literals(atoms.into_iter().map(flatten_nested_links).collect()),
                config,
                ..Default::default()
            }
        }

        /// A new string with the same config as `self`.
        pub(crate) fn derive(&self, atoms: Vec<Atom>) -> Self {
            Self::from_atoms(atoms, self.config)
        }

        /// Like [`MarkupString::literal()`], with the same config as `self`.
        pub(crate) fn plain_like(&self, text: &str) -> Self {
            self.derive(Atom::plain_text(text, self.config.escape_char))
        }

        /// Parse with the same config as `self`.
        pub(crate) fn parse_like(&self, raw: &str) -> Self {
            Self::with_config(raw, self.config)
        }
    }

    fn flatten_nested_links(atom: Atom) -> Atom {
        match atom {
            Atom::Link {
                kind,
                payload,
                inner,
                escape_char,
            } if inner.links().next().is_some() => {
                tracing::trace!(message = "nested link flattened", payload = %payload);
                Atom::Link {
                    kind,
                    payload,
                    inner: inner.strip_mxp(),
                    escape_char,
                }
            }
            other => other,
        }
    }

    /// Merge every run of adjacent [`Atom::Literal`]s into one, and drop empty ones.
    #[must_use]
    pub fn merge_literals(atoms: Vec<Atom>) -> Vec<Atom> {
        let mut acc: Vec<Atom> = Vec::with_capacity(atoms.len());
        for atom in atoms {
            match atom {
                Atom::Literal(text) if text.is_empty() => {}
                Atom::Literal(text) => {
                    if let Some(Atom::Literal(last)) = acc.last_mut() {
                        last.push_str(&text);
                    } else {
                        acc.push(Atom::Literal(text));
                    }
                }
                other => acc.push(other),
            }
        }
        acc
    }

    impl From<&str> for MarkupString {
        fn from(raw: &str) -> Self { Self::new(raw) }
    }

    impl From<String> for MarkupString {
        fn from(raw: String) -> Self { Self::new(&raw) }
    }

    impl From<&String> for MarkupString {
        fn from(raw: &String) -> Self { Self::new(raw) }
    }

    impl From<&MarkupString> for MarkupString {
        fn from(it: &MarkupString) -> Self { it.clone() }
    }
}
pub use construct::merge_literals;

mod access {
    use super::*;

    impl MarkupString {
        /// Text with all directives removed.
        #[must_use]
        pub fn clean(&self) -> &str {
            self.clean.get_or_init(|| {
                let mut acc = String::new();
                for atom in &self.atoms {
                    atom.push_clean(&mut acc);
                }
                acc
            })
        }

        /// Text with directives, suitable for storage or markup-aware clients.
        #[must_use]
        pub fn raw(&self) -> &str {
            self.raw.get_or_init(|| {
                let mut acc = String::new();
                for atom in &self.atoms {
                    atom.push_raw(&mut acc);
                }
                acc
            })
        }

        /// Number of visible characters.
        #[must_use]
        pub fn len(&self) -> usize {
            *self
                .len
                .get_or_init(|| self.atoms.iter().map(Atom::visible_width).sum())
        }

        /// No visible characters. Style codes may still be present.
        #[must_use]
        pub fn is_empty(&self) -> bool { self.len() == 0 }

        #[must_use]
        pub fn atoms(&self) -> &[Atom] { &self.atoms }

        #[must_use]
        pub fn config(&self) -> MarkupConfig { self.config }

        /// The link spans at the top level, in order.
        pub fn links(&self) -> impl Iterator<Item = LinkRef<'_>> {
            self.atoms.iter().filter_map(|atom| match atom {
                Atom::Link {
                    kind,
                    payload,
                    inner,
                    ..
                } => Some(LinkRef {
                    kind: *kind,
                    payload,
                    text: inner,
                }),
                _ => None,
            })
        }

        /// Replace every link with its inner atoms, keeping their styling.
        #[must_use]
        pub fn strip_mxp(&self) -> Self {
            let mut acc = Vec::with_capacity(self.atoms.len());
            for atom in &self.atoms {
                match atom {
                    Atom::Link { inner, .. } => acc.extend(inner.atoms.iter().cloned()),
                    other => acc.push(other.clone()),
                }
            }
            self.derive(acc)
        }

        /// `n` copies of `self` joined together.
        #[must_use]
        pub fn repeat(&self, n: usize) -> Self {
            let mut acc = Vec::with_capacity(self.atoms.len() * n);
            for _ in 0..n {
                acc.extend(self.atoms.iter().cloned());
            }
            self.derive(acc)
        }
    }

    impl Debug for MarkupString {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_tuple("MarkupString").field(&self.raw()).finish()
        }
    }

    impl AsRef<[Atom]> for MarkupString {
        fn as_ref(&self) -> &[Atom] { &self.atoms }
    }
}

/// Equality and hashing use the raw text, so style codes are significant. Ordering sorts
/// by what the reader sees, with ties broken by the raw text.
mod compare {
    use super::*;

    impl PartialEq for MarkupString {
        fn eq(&self, other: &Self) -> bool { self.raw() == other.raw() }
    }

    impl Eq for MarkupString {}

    impl PartialEq<str> for MarkupString {
        fn eq(&self, other: &str) -> bool { self.raw() == other }
    }

    impl PartialEq<&str> for MarkupString {
        fn eq(&self, other: &&str) -> bool { self.raw() == *other }
    }

    impl PartialEq<MarkupString> for &str {
        fn eq(&self, other: &MarkupString) -> bool { *self == other.raw() }
    }

    impl Hash for MarkupString {
        fn hash<H: Hasher>(&self, state: &mut H) { self.raw().hash(state); }
    }

    impl PartialOrd for MarkupString {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
    }

    impl Ord for MarkupString {
        fn cmp(&self, other: &Self) -> Ordering {
            self.clean()
                .cmp(other.clean())
                .then_with(|| self.raw().cmp(other.raw()))
        }
    }
}

/// Concatenation merges the literals at the junction, so `raw()` and `clean()` of the
/// sum are the concatenations of the operands' views.
mod concat {
    use super::*;

    impl MarkupString {
        fn concat_atoms(&self, other: &[Atom]) -> Self {
            let mut acc = Vec::with_capacity(self.atoms.len() + other.len());
            acc.extend(self.atoms.iter().cloned());
            acc.extend(other.iter().cloned());
            self.derive(acc)
        }
    }

    impl Add<&MarkupString> for &MarkupString {
        type Output = MarkupString;
        fn add(self, rhs: &MarkupString) -> MarkupString { self.concat_atoms(&rhs.atoms) }
    }

    impl Add for MarkupString {
        type Output = MarkupString;
        fn add(mut self, rhs: MarkupString) -> MarkupString {
            self += rhs;
            self
        }
    }

    impl Add<&MarkupString> for MarkupString {
        type Output = MarkupString;
        fn add(self, rhs: &MarkupString) -> MarkupString { &self + rhs }
    }

    impl Add<&str> for &MarkupString {
        type Output = MarkupString;
        fn add(self, rhs: &str) -> MarkupString { self + &self.parse_like(rhs) }
    }

    impl Add<&str> for MarkupString {
        type Output = MarkupString;
        fn add(self, rhs: &str) -> MarkupString { &self + rhs }
    }

    impl AddAssign<MarkupString> for MarkupString {
        fn add_assign(&mut self, rhs: MarkupString) {
            let mut atoms = std::mem::take(&mut self.atoms);
            atoms.extend(rhs.atoms);
            *self = self.derive(atoms);
        }
    }

    impl AddAssign<&MarkupString> for MarkupString {
        fn add_assign(&mut self, rhs: &MarkupString) { *self = &*self + rhs; }
    }

    impl AddAssign<&str> for MarkupString {
        fn add_assign(&mut self, rhs: &str) { *self = &*self + rhs; }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{MarkupCode, assert_eq2};

    #[test]
    fn test_views() {
        let it = MarkupString::new("|relectric |cboogaloo|n");
        assert_eq2!(it.clean(), "electric boogaloo");
        assert_eq2!(it.raw(), "|relectric |cboogaloo|n");
        assert_eq2!(it.len(), 17);
        assert!(!it.is_empty());
    }

    #[test]
    fn test_whitespace_codes_count() {
        let it = MarkupString::new("a|_b|>c|-d|/e||");
        assert_eq2!(it.clean(), "a b    c\td\ne|");
        assert_eq2!(it.len(), 13);
    }

    #[test]
    fn test_style_only_is_empty() {
        let it = MarkupString::new("|r|u|n");
        assert!(it.is_empty());
        assert_eq2!(it.clean(), "");
        assert_eq2!(it.atoms().len(), 3);
    }

    #[test]
    fn test_views_rebuilt_from_atoms_match() {
        let input = "|[b|500x |lclook|lt|gat|le ||y";
        let parsed = MarkupString::new(input);
        let rebuilt = MarkupString::from_atoms(parsed.atoms().to_vec(), parsed.config());
        assert_eq2!(rebuilt.raw(), input);
        assert_eq2!(rebuilt.clean(), parsed.clean());
    }

    #[test]
    fn test_literal_is_not_parsed() {
        let it = MarkupString::literal("|rnot red");
        assert_eq2!(it.clean(), "|rnot red");
        assert_eq2!(it.raw(), "||rnot red");
        assert_eq2!(MarkupString::new(it.raw()), it);
    }

    #[test]
    fn test_from_atoms_flattens_nested_links() {
        let config = MarkupConfig::default();
        let inner = MarkupString::new("|lcnorth|lt|rdoor|le!");
        let outer = MarkupString::from_atoms(
            vec![Atom::Link {
                kind: LinkKind::Command,
                payload: "look".into(),
                inner,
                escape_char: config.escape_char,
            }],
            config,
        );
        assert_eq2!(outer.raw(), "|lclook|lt|rdoor!|le");
        assert_eq2!(outer.links().count(), 1);
        assert!(outer.links().all(|link| link.text.links().next().is_none()));
    }

    #[test]
    fn test_merge_literals() {
        let atoms = merge_literals(vec![
            Atom::Literal("a".into()),
            Atom::Literal(String::new()),
            Atom::Literal("b".into()),
            Atom::Code {
                code: MarkupCode::Reset,
                raw: "|n".into(),
            },
            Atom::Literal("c".into()),
        ]);
        assert_eq2!(atoms.len(), 3);
        assert_eq2!(atoms[0], Atom::Literal("ab".into()));
    }

    #[test]
    fn test_equality_uses_raw() {
        let red = MarkupString::new("|rhi");
        let green = MarkupString::new("|ghi");
        assert_ne!(red, green);
        assert_eq2!(red.clean(), green.clean());
        assert!(red == "|rhi");
        assert!("|rhi" == red);

        let set: HashSet<MarkupString> = [red.clone(), MarkupString::new("|rhi")].into();
        assert_eq2!(set.len(), 1);
    }

    #[test]
    fn test_ordering_by_clean_then_raw() {
        let mut items = vec![
            MarkupString::new("|rb"),
            MarkupString::new("|ga"),
            MarkupString::new("|ra"),
        ];
        items.sort();
        let raws: Vec<&str> = items.iter().map(MarkupString::raw).collect();
        assert_eq2!(raws, vec!["|ga", "|ra", "|rb"]);
    }

    #[test]
    fn test_add_merges_literals_at_junction() {
        let a = MarkupString::new("|rfoo");
        let b = MarkupString::new("bar|n");
        let sum = &a + &b;
        assert_eq2!(sum.raw(), "|rfoobar|n");
        assert_eq2!(sum.clean(), "foobar");
        assert_eq2!(sum.atoms().len(), 3);

        let mut acc = MarkupString::new("x");
        acc += "|gy";
        acc += &MarkupString::new("z");
        assert_eq2!(acc.raw(), "x|gyz");
        assert_eq2!((acc + "!").raw(), "x|gyz!");
    }

    #[test]
    fn test_links_and_strip_mxp() {
        let it = MarkupString::new("see |lclook|lt|rthe box|n|le now");
        let links: Vec<LinkRef<'_>> = it.links().collect();
        assert_eq2!(links.len(), 1);
        assert_eq2!(links[0].kind, LinkKind::Command);
        assert_eq2!(links[0].payload, "look");
        assert_eq2!(links[0].text.clean(), "the box");

        let stripped = it.strip_mxp();
        assert_eq2!(stripped.raw(), "see |rthe box|n now");
        assert_eq2!(stripped.clean(), it.clean());
        assert_eq2!(stripped.strip_mxp(), stripped);
    }

    #[test]
    fn test_repeat() {
        let it = MarkupString::new("|rab");
        assert_eq2!(it.repeat(3).raw(), "|rab|rab|rab");
        assert_eq2!(it.repeat(3).len(), 6);
        assert!(it.repeat(0).atoms().is_empty());
    }

    #[test]
    fn test_debug_shows_raw() {
        assert_eq2!(format!("{:?}", MarkupString::new("|rx")), "MarkupString(\"|rx\")");
    }
}
