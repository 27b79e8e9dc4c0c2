// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Render [`MarkupString`]s to HTML fragments for web clients.
//!
//! | Markup                  | HTML                                                   |
//! |-------------------------|--------------------------------------------------------|
//! | palette colors          | `<span class="color-009 bgcolor-016">`                 |
//! | hex colors              | `<span style="color: #00ff00">`                        |
//! | underline, blink        | `underline` and `blink` classes                        |
//! | invert                  | foreground and background swapped                      |
//! | newline                 | `<br>`                                                 |
//! | tab                     | four `&nbsp;`                                          |
//! | a line of `---` / `___` | `<hr>`                                                 |
//! | command link            | `<a href="#" onclick="send_command('look');return false;">` |
//! | URL link                | `<a href="https://.." target="_blank">`                |
//!
//! Class numbers are xterm palette indices, zero padded to three digits. The client's
//! stylesheet maps them to colors.

use std::fmt::Write as _;

use crate::{BasicColor, HtmlConfig, InlineVec, LinkKind, MarkupColor, MarkupString,
            RenderOptions, Run, SharedRenderCache, StyleState, TransformColor,
            get_or_render};

/// Foreground of inverted text that has no background color.
const INVERT_DEFAULT_FG: MarkupColor = MarkupColor::basic(BasicColor::White, false);
/// Background of inverted text that has no foreground color.
const INVERT_DEFAULT_BG: MarkupColor = MarkupColor::basic(BasicColor::Black, false);

/// A line made only of at least this many `-` or `_` becomes a horizontal rule.
const HR_MIN_LEN: usize = 3;

/// URL schemes that may appear in an anchor. Anything else is rendered as plain text.
const SAFE_URL_SCHEMES: [&str; 5] = ["http", "https", "ftp", "mailto", "telnet"];

/// HTML renderer, with an optional shared cache.
///
/// ```
/// use r3bl_markup::{HtmlRenderer, MarkupString, RenderOptions};
///
/// let renderer = HtmlRenderer::new(RenderOptions::default());
/// let it = MarkupString::new("|rhot|n & cold");
/// assert_eq!(
///     renderer.render(&it),
///     "<span class=\"color-009\">hot</span> &amp; cold"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
    config: HtmlConfig,
    cache: Option<SharedRenderCache>,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: HtmlConfig) -> Self {
        self.config = config;
        self
    }

    /// Remember rendered output in `cache`.
    #[must_use]
    pub fn with_cache(mut self, cache: SharedRenderCache) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn config(&self) -> &HtmlConfig { &self.config }

    #[must_use]
    pub fn render(&self, text: &MarkupString) -> String {
        let key = format!(
            "{}:{}:{}",
            self.options.cache_tag(),
            self.config.command_handler,
            text.raw()
        );
        get_or_render(self.cache.as_ref(), &key, || {
            let mut writer = HtmlWriter::new(&self.config, text.clean());
            writer.write_runs(&text.runs());
            writer.finish()
        })
    }
}

struct HtmlWriter<'a> {
    config: &'a HtmlConfig,
    /// One entry per line of clean text, `true` for horizontal rules.
    hr_lines: Vec<bool>,
    line: usize,
    wanted: StyleState,
    open_span: bool,
    last_was_space: bool,
    out: String,
}

impl<'a> HtmlWriter<'a> {
    fn new(config: &'a HtmlConfig, clean: &str) -> Self {
        Self {
            config,
            hr_lines: clean.split('\n').map(is_hr_line).collect(),
            line: 0,
            wanted: StyleState::default(),
            open_span: false,
            last_was_space: false,
            out: String::new(),
        }
    }

    fn write_runs(&mut self, runs: &[Run]) {
        for run in runs {
            match run {
                Run::Text { style, text } => {
                    if *style != self.wanted {
                        self.close_span();
                        self.wanted = *style;
                    }
                    self.write_text(text);
                }
                Run::Reset => {
                    self.close_span();
                    self.wanted = StyleState::default();
                }
                Run::Link {
                    kind,
                    payload,
                    style,
                    runs,
                } => {
                    self.write_link(*kind, payload, runs);
                    if *style != self.wanted {
                        self.close_span();
                        self.wanted = *style;
                    }
                }
            }
        }
    }

    fn write_link(&mut self, kind: LinkKind, payload: &str, runs: &[Run]) {
        if kind == LinkKind::Url && !is_safe_url(payload) {
            tracing::debug!(message = "unsafe link url rendered as text", url = payload);
            self.write_runs(runs);
            return;
        }

        self.close_span();
        match kind {
            LinkKind::Command => {
                let call = format!(
                    "{}('{}');return false;",
                    self.config.command_handler,
                    escape_js(payload)
                );
                _ = write!(
                    self.out,
                    "<a href=\"#\" onclick=\"{}\">",
                    escape_attribute(&call)
                );
            }
            LinkKind::Url => {
                _ = write!(
                    self.out,
                    "<a href=\"{}\" target=\"_blank\">",
                    escape_attribute(payload)
                );
            }
        }
        self.write_runs(runs);
        self.close_span();
        self.out.push_str("</a>");
    }

    fn write_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.end_line();
                continue;
            }
            if self.on_hr_line() {
                continue;
            }
            self.open_span();
            match ch {
                ' ' if self.last_was_space => self.out.push_str("&nbsp;"),
                '\t' => self.out.push_str("&nbsp;&nbsp;&nbsp;&nbsp;"),
                '<' => self.out.push_str("&lt;"),
                '>' => self.out.push_str("&gt;"),
                '&' => self.out.push_str("&amp;"),
                ch => self.out.push(ch),
            }
            self.last_was_space = ch == ' ';
        }
    }

    fn on_hr_line(&self) -> bool { self.hr_lines.get(self.line).copied().unwrap_or(false) }

    /// A rule replaces its line, including the line break after it.
    fn end_line(&mut self) {
        if self.on_hr_line() {
            self.close_span();
            self.out.push_str("<hr>");
        } else {
            self.out.push_str("<br>");
        }
        self.line += 1;
        self.last_was_space = false;
    }

    fn open_span(&mut self) {
        if self.open_span || self.wanted.is_default() {
            return;
        }
        let (classes, styles) = span_attributes(&self.wanted);
        if classes.is_empty() && styles.is_empty() {
            return;
        }
        self.out.push_str("<span");
        if !classes.is_empty() {
            _ = write!(self.out, " class=\"{}\"", classes.join(" "));
        }
        if !styles.is_empty() {
            _ = write!(self.out, " style=\"{}\"", styles.join("; "));
        }
        self.out.push('>');
        self.open_span = true;
    }

    fn close_span(&mut self) {
        if self.open_span {
            self.out.push_str("</span>");
            self.open_span = false;
        }
    }

    fn finish(mut self) -> String {
        if self.on_hr_line() {
            self.close_span();
            self.out.push_str("<hr>");
        }
        self.close_span();
        self.out
    }
}

/// Class names and inline css declarations for a style.
fn span_attributes(style: &StyleState) -> (InlineVec<String>, InlineVec<String>) {
    let (fg, bg) = if style.invert {
        (
            Some(style.bg.unwrap_or(INVERT_DEFAULT_BG)),
            Some(style.fg.unwrap_or(INVERT_DEFAULT_FG)),
        )
    } else {
        (style.fg, style.bg)
    };

    let mut classes = InlineVec::new();
    let mut styles = InlineVec::new();

    for (color, class_prefix, property) in [
        (fg, "color", "color"),
        (bg, "bgcolor", "background-color"),
    ] {
        match color {
            None => {}
            Some(MarkupColor::Hex(rgb)) => {
                styles.push(format!("{property}: #{}", rgb.to_hex_digits()));
            }
            Some(color) => {
                classes.push(format!("{class_prefix}-{:03}", color.as_ansi().index));
            }
        }
    }
    if style.underline {
        classes.push("underline".to_string());
    }
    if style.blink {
        classes.push("blink".to_string());
    }

    (classes, styles)
}

fn is_hr_line(line: &str) -> bool {
    let line = line.trim();
    line.chars().count() >= HR_MIN_LEN && line.chars().all(|ch| ch == '-' || ch == '_')
}

/// Relative URLs and URLs with a known scheme.
fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    match url.find(':') {
        Some(colon) if !url[..colon].contains('/') => SAFE_URL_SCHEMES
            .iter()
            .any(|scheme| url[..colon].eq_ignore_ascii_case(scheme)),
        _ => true,
    }
}

fn escape_js(value: &str) -> String {
    let mut acc = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => acc.push_str("\\\\"),
            '\'' => acc.push_str("\\'"),
            '\n' => acc.push_str("\\n"),
            '\r' => acc.push_str("\\r"),
            ch => acc.push(ch),
        }
    }
    acc
}

fn escape_attribute(value: &str) -> String {
    let mut acc = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => acc.push_str("&amp;"),
            '<' => acc.push_str("&lt;"),
            '>' => acc.push_str("&gt;"),
            '"' => acc.push_str("&quot;"),
            ch if ch.is_control() => {}
            ch => acc.push(ch),
        }
    }
    acc
}
