//! Catalog page renderer.
//!
//! [`CatalogPage`] turns an optional slug into a complete HTML document:
//! the index grid when no slug is given, the detail page for a known slug,
//! and a terminal not-found page otherwise. Slug resolution always happens
//! before the preview is loaded, and a not-found slug never loads one.

use std::fmt::Write;

use qi_registry::{ComponentRecord, Registry};

use crate::code_block::CodeBlock;
use crate::html::escape;
use crate::layout::{Shell, render_document};
use crate::preview::{FALLBACK_TEXT, PreviewSource, PreviewState, load_preview};

/// Result of rendering a catalog route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    /// Index or detail document.
    Found(String),
    /// Not-found document.
    NotFound(String),
}

impl PageOutcome {
    /// The rendered document, regardless of outcome.
    #[must_use]
    pub fn into_html(self) -> String {
        match self {
            Self::Found(html) | Self::NotFound(html) => html,
        }
    }
}

/// Renders catalog pages from a registry.
#[derive(Clone, Copy, Debug)]
pub struct CatalogPage<'a> {
    registry: &'a Registry,
    site_title: &'a str,
}

impl<'a> CatalogPage<'a> {
    /// Create a renderer.
    #[must_use]
    pub fn new(registry: &'a Registry, site_title: &'a str) -> Self {
        Self {
            registry,
            site_title,
        }
    }

    /// Render the page for `slug`, or the index when `slug` is `None`.
    ///
    /// Unknown slugs render the not-found page without touching `previews`.
    pub async fn render(&self, slug: Option<&str>, previews: &dyn PreviewSource) -> PageOutcome {
        let Some(slug) = slug else {
            return PageOutcome::Found(self.index());
        };
        let Some(record) = self.registry.get(slug) else {
            tracing::debug!(slug = %slug, "Unknown component slug");
            return PageOutcome::NotFound(self.not_found());
        };

        let preview = load_preview(previews, &record.preview).await;
        PageOutcome::Found(self.render_detail(slug, record, &preview))
    }

    /// Render the index grid.
    #[must_use]
    pub fn index(&self) -> String {
        let mut main = String::with_capacity(4096);
        main.push_str("<div class=\"intro\">\n<h1>UI Components</h1>\n");
        main.push_str(
            "<p class=\"description\">Beautiful, interactive components built with React, \
             TypeScript, and Framer Motion.</p>\n</div>\n",
        );

        main.push_str("<div class=\"grid\">\n");
        for summary in self.registry.list() {
            let _ = writeln!(main, "<a class=\"card\" href=\"{}\">", escape(&summary.href()));
            let _ = writeln!(main, "<h3>{}</h3>", escape(&summary.title()));
            let _ = writeln!(main, "<p>{}</p>", escape(summary.record.description));
            main.push_str("<span class=\"more\">View Component →</span>\n</a>\n");
        }
        main.push_str("</div>");

        let shell = Shell {
            site_title: self.site_title,
            page_title: Some("Components"),
            active_slug: None,
        };
        render_document(&shell, self.registry, &main)
    }

    /// Render the detail page for `slug` with an already-resolved preview.
    ///
    /// Returns `None` for unknown slugs.
    #[must_use]
    pub fn detail(&self, slug: &str, preview: &PreviewState) -> Option<String> {
        let record = self.registry.get(slug)?;
        Some(self.render_detail(slug, record, preview))
    }

    /// Render the not-found page.
    #[must_use]
    pub fn not_found(&self) -> String {
        let main = "<div class=\"not-found\">\n<h1>404 – Page not found</h1>\n\
                    <p class=\"description\">This page could not be found.</p>\n\
                    <p><a href=\"/components\">Browse components</a></p>\n</div>";
        let shell = Shell {
            site_title: self.site_title,
            page_title: Some("Page not found"),
            active_slug: None,
        };
        render_document(&shell, self.registry, main)
    }

    fn render_detail(&self, slug: &str, record: &ComponentRecord, preview: &PreviewState) -> String {
        let title = record.title(slug);
        let mut main = String::with_capacity(record.implementation_source.len() * 3 + 4096);

        // Header
        main.push_str("<nav class=\"breadcrumb\">\n");
        main.push_str("<a href=\"/components\">Components</a>\n<span>→</span>\n");
        let _ = writeln!(main, "<span class=\"current\">{}</span>", escape(&title));
        main.push_str("</nav>\n");
        let _ = writeln!(main, "<h1>{}</h1>", escape(&title));
        let description = if record.description.trim().is_empty() {
            format!("A beautiful, customizable {title} component.")
        } else {
            record.description.to_owned()
        };
        let _ = writeln!(main, "<p class=\"description\">{}</p>", escape(&description));

        // Demo / Code
        let mut demo = String::new();
        let _ = writeln!(
            demo,
            "<div class=\"preview\" data-module=\"{}\" data-export=\"{}\">",
            escape(record.preview.module),
            escape(record.preview.export.key()),
        );
        match preview {
            PreviewState::Ready(fragment) => demo.push_str(fragment),
            PreviewState::Fallback => {
                let _ = write!(demo, "<p class=\"preview-fallback\">{FALLBACK_TEXT}</p>");
            }
        }
        demo.push_str("\n</div>\n");
        let code = CodeBlock::new(record.demo_source, "jsx").render();
        render_tabs(&mut main, "view", [("Demo", demo.as_str()), ("Code", code.as_str())]);

        // Installation
        main.push_str("<h2 id=\"installation\">Installation</h2>\n<hr>\n");
        let cli = CodeBlock::new(record.cli_command, "bash").render();
        let manual = render_manual(record);
        render_tabs(&mut main, "install", [("CLI", cli.as_str()), ("Manual", manual.as_str())]);

        let shell = Shell {
            site_title: self.site_title,
            page_title: Some(title.as_str()),
            active_slug: Some(slug),
        };
        render_document(&shell, self.registry, &main)
    }
}

/// Render the manual install path: ordered steps, or the full source.
fn render_manual(record: &ComponentRecord) -> String {
    let mut html = String::new();
    let Some(steps) = record.steps() else {
        CodeBlock::new(record.implementation_source, "jsx").render_into(&mut html);
        return html;
    };

    html.push_str("<ol class=\"steps\">\n");
    for step in steps {
        html.push_str("<li class=\"step\">\n");
        let _ = writeln!(html, "<h4>{}</h4>", escape(step.title));
        if let Some(filename) = step.filename {
            let _ = writeln!(
                html,
                "<p><code class=\"filename\">{}</code></p>",
                escape(filename)
            );
        }
        CodeBlock::new(step.code, step.language).render_into(&mut html);
        html.push_str("</li>\n");
    }
    html.push_str("</ol>\n");
    html
}

/// Render a two-tab block driven by radio inputs; the first tab is selected.
fn render_tabs(html: &mut String, group: &str, tabs: [(&str, &str); 2]) {
    html.push_str("<div class=\"tabs\">\n");
    for (index, (label, _)) in tabs.iter().enumerate() {
        let id = format!("{group}-{}", label.to_lowercase());
        let checked = if index == 0 { " checked" } else { "" };
        let _ = writeln!(
            html,
            "<input type=\"radio\" name=\"{group}\" id=\"{id}\"{checked}>\
             <label for=\"{id}\">{label}</label>"
        );
    }
    for (_, panel) in tabs {
        html.push_str("<div class=\"tab-panel\">\n");
        html.push_str(panel);
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}
