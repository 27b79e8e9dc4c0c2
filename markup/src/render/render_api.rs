// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HtmlRenderer, MarkupString, RenderOptions, TerminalRenderer};

impl MarkupString {
    /// Render with ANSI escape sequences. Ignores `options.html`.
    ///
    /// ```
    /// use r3bl_markup::{MarkupString, RenderOptions};
    ///
    /// let it = MarkupString::new("|#00ff00X|n");
    /// assert_eq!(it.to_terminal(&RenderOptions::default()), "\x1b[1;32mX\x1b[0m");
    /// ```
    #[must_use]
    pub fn to_terminal(&self, options: &RenderOptions) -> String {
        TerminalRenderer::new(*options).render(self)
    }

    /// Render as an HTML fragment. Ignores `options.html`.
    #[must_use]
    pub fn to_html(&self, options: &RenderOptions) -> String {
        HtmlRenderer::new(*options).render(self)
    }

    /// Render as HTML if `options.html` is set, otherwise for a terminal.
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        if options.html {
            self.to_html(options)
        } else {
            self.to_terminal(options)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_render_dispatches_on_html_flag() {
        let it = MarkupString::new("|ra|/b");
        let terminal = RenderOptions::default();
        let html = RenderOptions {
            html: true,
            ..terminal
        };
        assert_eq2!(it.render(&terminal), "\x1b[1;31ma\nb\x1b[0m");
        assert_eq2!(it.render(&html), "<span class=\"color-009\">a<br>b</span>");
    }
}
