// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render [`MarkupString`]s to ANSI escape sequences.
//!
//! Styles are emitted lazily: a new SGR sequence is written only when the style of the
//! next visible text differs from what the terminal currently shows. Each sequence
//! carries the complete new state, prefixed with `0` when an attribute has to be turned
//! off, since SGR has no portable way to clear a single color.
//!
//! Bright basic foreground colors are written as bold plus the normal color (`1;31`),
//! which every 16 color client understands.

use std::fmt::Write as _;

use crate::{ColorSupport, DegradedColor, LinkKind, LinkProtocol, MarkupString,
            RenderOptions, Run, SgrCode, SgrSequence, SharedRenderCache, StyleState,
            degrade_color, format_hyperlink, format_mxp_anchor, format_mxp_send,
            get_or_render};

/// Terminal renderer for one set of [`RenderOptions`], with an optional shared cache.
///
/// ```
/// use r3bl_markup::{MarkupString, RenderOptions, TerminalRenderer};
///
/// let renderer = TerminalRenderer::new(RenderOptions::default());
/// let it = MarkupString::new("|relectric |cboogaloo|n");
/// assert_eq!(
///     renderer.render(&it),
///     "\x1b[1;31melectric \x1b[1;36mboogaloo\x1b[0m"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TerminalRenderer {
    options: RenderOptions,
    cache: Option<SharedRenderCache>,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            cache: None,
        }
    }

    /// Remember rendered output in `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: SharedRenderCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions { &self.options }

    #[must_use]
    pub fn render(&self, text: &MarkupString) -> String {
        let key = format!("{}:{}", self.options.cache_tag(), text.raw());
        get_or_render(self.cache.as_ref(), &key, || self.render_runs(&text.runs()))
    }

    /// Render runs produced by [`MarkupString::runs()`]. Never cached.
    #[must_use]
    pub fn render_runs(&self, runs: &[Run]) -> String {
        let mut writer = TerminalWriter::new(&self.options);
        writer.write_runs(runs);
        writer.finish()
    }
}

/// What the terminal is showing, in SGR terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SgrState {
    bold: bool,
    underline: bool,
    blink: bool,
    invert: bool,
    fg: Option<SgrCode>,
    bg: Option<SgrCode>,
}

impl SgrState {
    fn new(style: &StyleState, color_support: ColorSupport) -> Self {
        if color_support == ColorSupport::NoColor {
            return Self::default();
        }

        let mut bold = false;
        let fg = style
            .fg
            .and_then(|color| degrade_color(color, color_support))
            .map(|color| match color {
                DegradedColor::Basic { color, bright } => {
                    bold = bright;
                    SgrCode::ForegroundBasic(color.sgr_offset())
                }
                DegradedColor::Ansi(ansi) => SgrCode::ForegroundAnsi256(ansi.index),
                DegradedColor::Rgb(rgb) => {
                    SgrCode::ForegroundRGB(rgb.red, rgb.green, rgb.blue)
                }
            });

        let bg = style
            .bg
            .and_then(|color| degrade_color(color, color_support))
            .map(|color| match color {
                DegradedColor::Basic {
                    color,
                    bright: true,
                } => SgrCode::BackgroundBright(color.sgr_offset()),
                DegradedColor::Basic {
                    color,
                    bright: false,
                } => SgrCode::BackgroundBasic(color.sgr_offset()),
                DegradedColor::Ansi(ansi) => SgrCode::BackgroundAnsi256(ansi.index),
                DegradedColor::Rgb(rgb) => {
                    SgrCode::BackgroundRGB(rgb.red, rgb.green, rgb.blue)
                }
            });

        Self {
            bold,
            underline: style.underline,
            blink: style.blink,
            invert: style.invert,
            fg,
            bg,
        }
    }

    fn is_default(&self) -> bool { *self == Self::default() }

    /// Does going from `prev` to `self` turn anything off?
    fn removes_from(&self, prev: &Self) -> bool {
        (prev.bold && !self.bold)
            || (prev.underline && !self.underline)
            || (prev.blink && !self.blink)
            || (prev.invert && !self.invert)
            || (prev.fg.is_some() && self.fg.is_none())
            || (prev.bg.is_some() && self.bg.is_none())
    }

    /// The sequence that takes the terminal from `prev` to `self`. Empty if they are the
    /// same.
    fn transition_from(&self, prev: &Self) -> SgrSequence {
        let mut acc = SgrSequence::new();
        if self == prev {
            return acc;
        }
        if self.removes_from(prev) {
            acc.push(SgrCode::Reset);
        }
        if self.bold {
            acc.push(SgrCode::Bold);
        }
        if self.underline {
            acc.push(SgrCode::Underline);
        }
        if self.blink {
            acc.push(SgrCode::SlowBlink);
        }
        if self.invert {
            acc.push(SgrCode::Invert);
        }
        acc.codes.extend(self.fg);
        acc.codes.extend(self.bg);
        acc
    }
}

struct TerminalWriter<'a> {
    options: &'a RenderOptions,
    color_support: ColorSupport,
    shown: SgrState,
    out: String,
}

impl<'a> TerminalWriter<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            color_support: options.color_support(),
            shown: SgrState::default(),
            out: String::new(),
        }
    }

    fn write_runs(&mut self, runs: &[Run]) {
        for run in runs {
            match run {
                Run::Text { style, text } => {
                    self.show(style);
                    self.out.push_str(text);
                }
                Run::Reset => {
                    if self.color_support != ColorSupport::NoColor {
                        _ = write!(self.out, "{}", SgrCode::Reset);
                    }
                    self.shown = SgrState::default();
                }
                Run::Link {
                    kind,
                    payload,
                    runs,
                    ..
                } => self.write_link(*kind, payload, runs),
            }
        }
    }

    fn write_link(&mut self, kind: LinkKind, payload: &str, runs: &[Run]) {
        let wrapped = self.options.links
            && !(self.options.link_protocol == LinkProtocol::Osc8
                && kind == LinkKind::Command);
        if !wrapped {
            self.write_runs(runs);
            return;
        }

        let outer = std::mem::take(&mut self.out);
        self.write_runs(runs);
        let text = std::mem::replace(&mut self.out, outer);

        let link = match (self.options.link_protocol, kind) {
            (LinkProtocol::Mxp, LinkKind::Command) => format_mxp_send(payload, &text),
            (LinkProtocol::Mxp, LinkKind::Url) => format_mxp_anchor(payload, &text),
            (LinkProtocol::Osc8, _) => format_hyperlink(payload, &text),
        };
        self.out.push_str(&link);
    }

    fn show(&mut self, style: &StyleState) {
        let next = SgrState::new(style, self.color_support);
        _ = write!(self.out, "{}", next.transition_from(&self.shown));
        self.shown = next;
    }

    fn finish(mut self) -> String {
        if !self.shown.is_default() {
            _ = write!(self.out, "{}", SgrCode::Reset);
        }
        self.out
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, new_shared_render_cache};

    fn render(raw: &str, options: RenderOptions) -> String {
        TerminalRenderer::new(options).render(&MarkupString::new(raw))
    }

    fn ansi16() -> RenderOptions { RenderOptions::default() }

    fn xterm256() -> RenderOptions {
        RenderOptions {
            xterm256: true,
            ..Default::default()
        }
    }

    fn truecolor() -> RenderOptions {
        RenderOptions {
            xterm256: true,
            truecolor: true,
            ..Default::default()
        }
    }

    fn no_color() -> RenderOptions {
        RenderOptions {
            ansi_color: false,
            ..Default::default()
        }
    }

    fn with_links(protocol: LinkProtocol) -> RenderOptions {
        RenderOptions {
            links: true,
            link_protocol: protocol,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_colors() {
        assert_eq2!(
            render("|relectric |cboogaloo|n", ansi16()),
            "\x1b[1;31melectric \x1b[1;36mboogaloo\x1b[0m"
        );
        assert_eq2!(render("|Rdark", ansi16()), "\x1b[31mdark\x1b[0m");
    }

    #[test]
    fn test_hex_color_per_depth() {
        assert_eq2!(render("|#00ff00X|n", ansi16()), "\x1b[1;32mX\x1b[0m");
        assert_eq2!(render("|#00ff00X|n", xterm256()), "\x1b[38;5;46mX\x1b[0m");
        assert_eq2!(render("|#00ff00X|n", truecolor()), "\x1b[38;2;0;255;0mX\x1b[0m");
        assert_eq2!(render("|#00ff00X|n", no_color()), "X");
    }

    #[test]
    fn test_dropping_bold_resets_first() {
        assert_eq2!(render("|rA|RB", ansi16()), "\x1b[1;31mA\x1b[0;31mB\x1b[0m");
        assert_eq2!(render("|RA|rB", ansi16()), "\x1b[31mA\x1b[1;31mB\x1b[0m");
    }

    #[test]
    fn test_toggles_and_backgrounds() {
        assert_eq2!(
            render("|u|[Rx|ux", ansi16()),
            "\x1b[4;41mx\x1b[0;41mx\x1b[0m"
        );
        assert_eq2!(render("|[rx", ansi16()), "\x1b[101mx\x1b[0m");
        assert_eq2!(render("|*|^x", ansi16()), "\x1b[5;7mx\x1b[0m");
        assert_eq2!(render("|[500x", xterm256()), "\x1b[48;5;196mx\x1b[0m");
    }

    #[test]
    fn test_style_change_without_text_emits_nothing() {
        assert_eq2!(render("a|r|gb", ansi16()), "a\x1b[1;32mb\x1b[0m");
        assert_eq2!(render("|r", ansi16()), "");
    }

    #[test]
    fn test_whitespace_codes() {
        assert_eq2!(render("a|/b|-c|_d|>e||", no_color()), "a\nb\tc d    e|");
    }

    #[test]
    fn test_reset_is_emitted_where_written() {
        assert_eq2!(render("a|nb", ansi16()), "a\x1b[0mb");
        assert_eq2!(render("a|nb", no_color()), "ab");
    }

    #[test]
    fn test_links_off_render_text() {
        assert_eq2!(
            render("|lclook|ltthe |rbox|le!", ansi16()),
            "the \x1b[1;31mbox\x1b[0m!"
        );
    }

    #[test_case(
        LinkProtocol::Mxp,
        "|lclook|ltthe box|le",
        "\x1b[4z<SEND HREF=\"look\">the box\x1b[4z</SEND>"
    )]
    #[test_case(
        LinkProtocol::Mxp,
        "|luhttps://x.io|ltsite|le",
        "\x1b[4z<A HREF=\"https://x.io\">site\x1b[4z</A>"
    )]
    #[test_case(
        LinkProtocol::Osc8,
        "|luhttps://x.io|ltsite|le",
        "\x1b]8;;https://x.io\x07site\x1b]8;;\x07"
    )]
    #[test_case(LinkProtocol::Osc8, "|lclook|ltthe box|le", "the box")]
    fn test_links(protocol: LinkProtocol, raw: &str, expected: &str) {
        assert_eq2!(render(raw, with_links(protocol)), expected);
    }

    #[test]
    fn test_styled_link_text_is_inside_the_tag() {
        assert_eq2!(
            render("|lclook|lt|rbox|le", with_links(LinkProtocol::Mxp)),
            "\x1b[4z<SEND HREF=\"look\">\x1b[1;31mbox\x1b[4z</SEND>\x1b[0m"
        );
    }

    #[test]
    fn test_cache_is_keyed_by_options() {
        let cache = new_shared_render_cache(8);
        let it = MarkupString::new("|#00ff00X");
        let plain = TerminalRenderer::new(ansi16()).with_cache(cache.clone());
        let rich = TerminalRenderer::new(truecolor()).with_cache(cache.clone());

        assert_eq2!(plain.render(&it), "\x1b[1;32mX\x1b[0m");
        assert_eq2!(rich.render(&it), "\x1b[38;2;0;255;0mX\x1b[0m");
        assert_eq2!(plain.render(&it), "\x1b[1;32mX\x1b[0m");
        assert_eq2!(cache.lock().map(|it| it.len()).unwrap_or_default(), 2);
    }
}
