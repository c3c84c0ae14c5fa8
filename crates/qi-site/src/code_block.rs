//! Read-only source snippet with a copy button.
//!
//! The block is server-rendered: a `<pre><code>` element tagged with the
//! language (for client-side highlighters), one `<span class="line">` per
//! source line, and a button carrying the exact text in `data-copy`.
//! Copy behavior itself lives in the `copy.js` asset and, for terminal use,
//! in [`CopyButton`](crate::CopyButton).

use std::fmt::Write;

use crate::html::escape;

/// A code snippet ready to be rendered.
#[derive(Clone, Copy, Debug)]
pub struct CodeBlock<'a> {
    text: &'a str,
    language: &'a str,
    show_line_numbers: bool,
}

impl<'a> CodeBlock<'a> {
    /// Create a block with line numbers enabled.
    #[must_use]
    pub fn new(text: &'a str, language: &'a str) -> Self {
        Self {
            text,
            language,
            show_line_numbers: true,
        }
    }

    /// Toggle the line-number gutter.
    #[must_use]
    pub fn line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Text copied by the button, verbatim.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Render to an HTML fragment.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(self.text.len() * 2 + 256);
        self.render_into(&mut html);
        html
    }

    pub(crate) fn render_into(&self, html: &mut String) {
        let class = if self.show_line_numbers {
            "code-block numbered"
        } else {
            "code-block"
        };
        let _ = writeln!(html, "<div class=\"{class}\">");
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"copy-button\" data-copy=\"{}\" data-label=\"Copy\">Copy</button>",
            escape(self.text)
        );
        let _ = write!(
            html,
            "<pre><code class=\"language-{}\">",
            escape(self.language)
        );
        for (index, line) in self.text.lines().enumerate() {
            if index > 0 {
                html.push('\n');
            }
            let _ = write!(
                html,
                "<span class=\"line\" data-line=\"{}\">{}</span>",
                index + 1,
                escape(line)
            );
        }
        html.push_str("</code></pre>\n</div>\n");
    }
}
