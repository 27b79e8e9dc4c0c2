// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

use crate::{ColorSupport, InlineString, Stream, global_color_support, inline_string};

/// How clickable links are written to a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LinkProtocol {
    /// MUD eXtension Protocol `SEND` and `A` tags. Supports command and URL links.
    #[default]
    Mxp,
    /// OSC 8 terminal hyperlinks. Supports URL links only, command links render as text.
    Osc8,
}

/// What the client on the other end can display.
///
/// The color depth used by the terminal renderer is the highest one enabled:
///
/// | `ansi_color` | `xterm256` | `truecolor` | Result                    |
/// |--------------|------------|-------------|---------------------------|
/// | `false`      | any        | any         | [`ColorSupport::NoColor`] |
/// | `true`       | `false`    | any         | [`ColorSupport::Ansi16`]  |
/// | `true`       | `true`     | `false`     | [`ColorSupport::Ansi256`] |
/// | `true`       | `true`     | `true`      | [`ColorSupport::Truecolor`] |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderOptions {
    pub ansi_color: bool,
    pub xterm256: bool,
    pub truecolor: bool,
    /// [`MarkupString::render()`](crate::MarkupString::render) produces HTML instead of
    /// escape sequences.
    pub html: bool,
    /// Emit clickable links in terminal output. HTML output always has anchors.
    pub links: bool,
    pub link_protocol: LinkProtocol,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ansi_color: true,
            xterm256: false,
            truecolor: false,
            html: false,
            links: false,
            link_protocol: LinkProtocol::default(),
        }
    }
}

impl From<ColorSupport> for RenderOptions {
    fn from(color_support: ColorSupport) -> Self {
        let (ansi_color, xterm256, truecolor) = match color_support {
            ColorSupport::Truecolor => (true, true, true),
            ColorSupport::Ansi256 => (true, true, false),
            ColorSupport::Ansi16 => (true, false, false),
            ColorSupport::NoColor => (false, false, false),
        };
        Self {
            ansi_color,
            xterm256,
            truecolor,
            ..Default::default()
        }
    }
}

impl RenderOptions {
    /// Options matching the local terminal, see [`global_color_support::detect()`].
    #[must_use]
    pub fn detect() -> Self { global_color_support::detect().into() }

    /// Options matching the given stream of the local terminal, ignoring any global
    /// override.
    #[must_use]
    pub fn detect_for(stream: Stream) -> Self {
        crate::examine_env_vars_to_determine_color_support(stream).into()
    }

    #[must_use]
    pub fn color_support(&self) -> ColorSupport {
        match (self.ansi_color, self.xterm256, self.truecolor) {
            (false, _, _) => ColorSupport::NoColor,
            (true, false, _) => ColorSupport::Ansi16,
            (true, true, false) => ColorSupport::Ansi256,
            (true, true, true) => ColorSupport::Truecolor,
        }
    }

    /// Identifies the output these options produce, so that renderers with different
    /// options can share one render cache.
    #[must_use]
    pub fn cache_tag(&self) -> InlineString {
        let flag = |it: bool| if it { '1' } else { '0' };
        inline_string!(
            "{}{}{}{}{}{}",
            flag(self.ansi_color),
            flag(self.xterm256),
            flag(self.truecolor),
            flag(self.html),
            flag(self.links),
            self.link_protocol
        )
    }
}

/// Name of the JavaScript function an HTML command link calls.
pub const DEFAULT_COMMAND_HANDLER: &str = "send_command";

/// Settings that only apply to HTML output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HtmlConfig {
    /// Called with the command as its only argument when a command link is clicked.
    pub command_handler: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            command_handler: DEFAULT_COMMAND_HANDLER.to_string(),
        }
    }
}
