// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for `markup_render`.

use clap::Parser;
use tracing_core::LevelFilter;

use crate::{ColorSupport, LinkProtocol, MarkupConfig, RenderOptions, TracingConfig};

/// Render game markup to the terminal or to HTML.
#[derive(Debug, Parser)]
#[command(
    name = "markup_render",
    about = "Render game markup to ANSI escape sequences or HTML",
    long_about = "Renders markup like `|rred |[bon blue|n` to stdout.\n\n\
                  The text is taken from the arguments (joined with spaces), or from \
                  stdin if there are none. Without a color flag the color depth of the \
                  terminal is detected.",
    version
)]
#[allow(clippy::struct_excessive_bools)]
pub struct CLIArg {
    /// Write HTML instead of escape sequences
    #[arg(long)]
    pub html: bool,

    /// Use the xterm 256 color palette
    #[arg(long)]
    pub xterm256: bool,

    /// Use 24-bit color for hex colors (implies --xterm256)
    #[arg(long)]
    pub truecolor: bool,

    /// Write no color or style sequences at all
    #[arg(long, conflicts_with_all = ["xterm256", "truecolor"])]
    pub no_color: bool,

    /// Write clickable links with this protocol (mxp or osc8)
    #[arg(long, value_name = "PROTOCOL")]
    pub links: Option<LinkProtocol>,

    /// Print the text with all markup removed
    #[arg(long, conflicts_with = "raw")]
    pub clean: bool,

    /// Print the markup as parsed, without rendering it
    #[arg(long)]
    pub raw: bool,

    /// Character that starts a directive
    #[arg(long, default_value_t = crate::DEFAULT_ESCAPE_CHAR)]
    pub escape_char: char,

    /// Log to stderr at this level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,

    /// Markup to render. Read from stdin if empty
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// What to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Clean,
    Raw,
    Render(RenderOptions),
}

impl CLIArg {
    /// `detected` is used when no color flag is given.
    #[must_use]
    pub fn to_render_options(&self, detected: ColorSupport) -> RenderOptions {
        let color_support = if self.no_color {
            ColorSupport::NoColor
        } else if self.truecolor {
            ColorSupport::Truecolor
        } else if self.xterm256 {
            ColorSupport::Ansi256
        } else {
            detected
        };

        RenderOptions {
            html: self.html,
            links: self.links.is_some(),
            link_protocol: self.links.unwrap_or_default(),
            ..color_support.into()
        }
    }

    #[must_use]
    pub fn to_output_mode(&self, detected: ColorSupport) -> OutputMode {
        if self.clean {
            OutputMode::Clean
        } else if self.raw {
            OutputMode::Raw
        } else {
            OutputMode::Render(self.to_render_options(detected))
        }
    }

    #[must_use]
    pub fn to_markup_config(&self) -> MarkupConfig {
        MarkupConfig::default().with_escape_char(self.escape_char)
    }

    #[must_use]
    pub fn to_tracing_config(&self) -> TracingConfig { self.log_level.into() }
}
