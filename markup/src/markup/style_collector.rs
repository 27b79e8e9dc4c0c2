// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Reduce an atom sequence into [`Run`]s that renderers walk. A run is a maximal span of
//! text that shares one [`StyleState`].

use super::{Atom, LinkKind, MarkupCode, MarkupString};
use crate::MarkupColor;

/// Style attributes in effect at some point of the text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    pub fg: Option<MarkupColor>,
    pub bg: Option<MarkupColor>,
    pub underline: bool,
    pub blink: bool,
    pub invert: bool,
}

impl StyleState {
    /// Apply a style code. Whitespace codes have no effect.
    pub fn apply(&mut self, code: &MarkupCode) {
        match code {
            MarkupCode::Reset => *self = Self::default(),
            MarkupCode::Fg(color) => self.fg = Some(*color),
            MarkupCode::Bg(color) => self.bg = Some(*color),
            MarkupCode::Underline => self.underline = !self.underline,
            MarkupCode::Invert => self.invert = !self.invert,
            MarkupCode::Blink => self.blink = !self.blink,
            MarkupCode::Newline
            | MarkupCode::Tab
            | MarkupCode::Space
            | MarkupCode::Indent { .. }
            | MarkupCode::EscapedEscape(_) => {}
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool { *self == Self::default() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Run {
    Text { style: StyleState, text: String },
    /// An explicit reset directive.
    Reset,
    /// A link span. `runs` start from `style`, and the style after the link is `style`
    /// again.
    Link {
        kind: LinkKind,
        payload: String,
        style: StyleState,
        runs: Vec<Run>,
    },
}

/// Walks atoms left to right, tracking the style state.
#[derive(Debug, Default)]
pub struct StyleCollector {
    state: StyleState,
    text: String,
    runs: Vec<Run>,
}

impl StyleCollector {
    /// Start from `state` (the default state for top level text, the enclosing state for
    /// link text).
    #[must_use]
    pub fn new(state: StyleState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn collect(mut self, atoms: &[Atom]) -> Vec<Run> {
        for atom in atoms {
            match atom {
                Atom::Literal(text) => self.text.push_str(text),
                Atom::Code {
                    code: MarkupCode::Reset,
                    ..
                } => {
                    self.flush();
                    self.runs.push(Run::Reset);
                    self.state = StyleState::default();
                }
                Atom::Code { code, .. } if code.is_zero_width() => {
                    let mut next = self.state;
                    next.apply(code);
                    if next != self.state {
                        self.flush();
                        self.state = next;
                    }
                }
                Atom::Code { code, .. } => code.push_clean(&mut self.text),
                Atom::Link {
                    kind,
                    payload,
                    inner,
                    ..
                } => {
                    self.flush();
                    let runs = StyleCollector::new(self.state).collect(inner.atoms());
                    self.runs.push(Run::Link {
                        kind: *kind,
                        payload: payload.clone(),
                        style: self.state,
                        runs,
                    });
                }
            }
        }
        self.flush();
        self.runs
    }

    /// Emit buffered text in the current state, extending the previous run when the
    /// style is the same.
    fn flush(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        if let Some(Run::Text { style, text: last }) = self.runs.last_mut()
            && *style == self.state
        {
            last.push_str(&text);
            return;
        }
        self.runs.push(Run::Text {
            style: self.state,
            text,
        });
    }
}

impl MarkupString {
    /// Style runs for renderers.
    #[must_use]
    pub fn runs(&self) -> Vec<Run> { StyleCollector::default().collect(self.atoms()) }
}
