//! Document shell shared by every catalog page: head, navbar and sidebar.
//!
//! The sidebar is projected from the registry, grouped by category, so a
//! navigation link can never point at a slug the registry does not know.

use std::fmt::Write;

use qi_registry::{Category, Registry};

use crate::html::escape;

/// Author link shown in the navbar and the sidebar.
const FOLLOW_URL: &str = "https://twitter.com/kanak_k365";

/// Per-page data for the document shell.
pub(crate) struct Shell<'a> {
    /// Brand shown in the navbar and appended to the `<title>`.
    pub site_title: &'a str,
    /// Page-specific title; `None` for the landing page.
    pub page_title: Option<&'a str>,
    /// Slug highlighted in the sidebar.
    pub active_slug: Option<&'a str>,
}

/// Render a complete HTML document around `main`.
pub(crate) fn render_document(shell: &Shell<'_>, registry: &Registry, main: &str) -> String {
    let mut html = String::with_capacity(main.len() + 4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let title = match shell.page_title {
        Some(page) => format!("{page} - {}", shell.site_title),
        None => shell.site_title.to_owned(),
    };
    let _ = writeln!(html, "<title>{}</title>", escape(&title));
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"/assets/{}\">",
        qi_assets::STYLESHEET
    );
    let _ = writeln!(
        html,
        "<script src=\"/assets/{}\" defer></script>",
        qi_assets::COPY_SCRIPT
    );
    html.push_str("</head>\n<body>\n");

    render_navbar(&mut html, shell.site_title);

    html.push_str("<div class=\"shell\">\n");
    render_sidebar(&mut html, registry, shell.active_slug);
    html.push_str("<main class=\"content\">\n");
    html.push_str(main);
    html.push_str("\n</main>\n</div>\n");

    html.push_str("</body>\n</html>\n");
    html
}

fn render_navbar(html: &mut String, site_title: &str) {
    html.push_str("<header class=\"navbar\">\n");
    let _ = writeln!(html, "<a class=\"brand\" href=\"/\">{}</a>", escape(site_title));
    html.push_str("<nav>\n");
    html.push_str("<a href=\"/components\">Components</a>\n");
    let _ = writeln!(
        html,
        "<a href=\"{FOLLOW_URL}\" target=\"_blank\" rel=\"noopener\">X</a>"
    );
    html.push_str("</nav>\n</header>\n");
}

/// Render the sidebar (matches the catalog's category grouping).
fn render_sidebar(html: &mut String, registry: &Registry, active_slug: Option<&str>) {
    html.push_str("<aside class=\"sidebar\">\n");

    html.push_str("<h4>Follow for updates</h4>\n<ul>\n");
    let _ = writeln!(html, "<li><a href=\"{FOLLOW_URL}\">Twitter @kanak_k365</a></li>");
    html.push_str("</ul>\n");

    for category in Category::ALL {
        let mut members = registry
            .list()
            .filter(|summary| summary.record.category == category)
            .peekable();
        if members.peek().is_none() {
            continue;
        }

        let _ = writeln!(html, "<h4>{}</h4>", category.label());
        html.push_str("<ul>\n");
        for summary in members {
            let current = if active_slug == Some(summary.slug) {
                " aria-current=\"page\""
            } else {
                ""
            };
            let _ = writeln!(
                html,
                "<li><a href=\"{}\"{current}>{}</a></li>",
                escape(&summary.href()),
                escape(&summary.title()),
            );
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</aside>\n");
}
