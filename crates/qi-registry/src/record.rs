//! Catalog entry descriptors.
//!
//! A [`ComponentRecord`] bundles everything the site and the registry API
//! need to know about one showcased component: display metadata, the demo
//! and implementation sources, install instructions and the preview it
//! renders in the "Demo" tab.
//!
//! Records are plain static data. All string fields borrow `'static` text,
//! most of it compiled in with `include_str!` from the `catalog/` directory.

use serde::Serialize;

/// Sidebar group a component is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Card-style components.
    Cards,
    /// Canvas and SVG animations.
    Animations,
    /// Larger widgets (calendars, navigation bars).
    Widgets,
}

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Self; 3] = [Self::Cards, Self::Animations, Self::Widgets];

    /// Heading shown in the sidebar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cards => "Cards",
            Self::Animations => "Animations",
            Self::Widgets => "Widgets",
        }
    }
}

/// Which export of a preview module renders the component.
///
/// Every record names its export explicitly, so resolving a preview is a
/// single lookup rather than a probe over candidate names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum PreviewExport {
    /// The module's default export.
    Default,
    /// A named export (e.g. `Card`).
    Named(&'static str),
}

impl PreviewExport {
    /// Export key as it appears in the preview module.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Named(name) => name,
        }
    }
}

/// Deferred reference to the live preview of a component.
///
/// The preview is not loaded with the record; the site resolves it on
/// demand through a preview source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Preview module name (e.g. `"Wave"`).
    pub module: &'static str,
    /// Export of the module that renders the component.
    pub export: PreviewExport,
}

impl Preview {
    /// Preview rendered by the module's default export.
    #[must_use]
    pub const fn default_export(module: &'static str) -> Self {
        Self {
            module,
            export: PreviewExport::Default,
        }
    }

    /// Preview rendered by a named export of the module.
    #[must_use]
    pub const fn named(module: &'static str, export: &'static str) -> Self {
        Self {
            module,
            export: PreviewExport::Named(export),
        }
    }
}

/// One instructional unit of the manual install path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ManualStep {
    /// Step heading.
    pub title: &'static str,
    /// Code or shell command for the step.
    pub code: &'static str,
    /// Highlighting language of `code`.
    pub language: &'static str,
    /// Target file name, when the step creates a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<&'static str>,
}

/// Additional file shipped with a component manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Path in the consumer's project.
    pub path: &'static str,
    /// File content.
    pub content: &'static str,
}

/// Static descriptor of one catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Display name. When empty, the title is derived from the slug.
    pub name: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Sidebar group.
    pub category: Category,
    /// Preview shown in the "Demo" tab.
    pub preview: Preview,
    /// Example usage source.
    pub demo_source: &'static str,
    /// Full component source.
    pub implementation_source: &'static str,
    /// Name the registry API publishes this record under, when it differs
    /// from the slug (e.g. `feature-list` for `featurelist`).
    pub api_name: Option<&'static str>,
    /// File name the implementation is served under by the registry API.
    pub registry_path: &'static str,
    /// Files shipped after the implementation in the registry manifest.
    pub extra_files: &'static [SourceFile],
    /// One-line install command.
    pub cli_command: &'static str,
    /// Manual install steps, in order. Empty means "no manual steps".
    pub manual_steps: &'static [ManualStep],
    /// npm dependencies.
    pub dependencies: &'static [&'static str],
    /// npm dev dependencies.
    pub dev_dependencies: &'static [&'static str],
    /// Other registry components this one builds on.
    pub registry_dependencies: &'static [&'static str],
}

impl ComponentRecord {
    /// Display title for the given slug.
    ///
    /// Uses the explicit name when present, otherwise capitalizes the slug.
    #[must_use]
    pub fn title(&self, slug: &str) -> String {
        if self.name.is_empty() {
            capitalize(slug)
        } else {
            self.name.to_owned()
        }
    }

    /// Name published by the registry API for the given slug.
    #[must_use]
    pub fn api_name<'a>(&self, slug: &'a str) -> &'a str {
        self.api_name.unwrap_or(slug)
    }

    /// Manual steps, or `None` when the record has none.
    #[must_use]
    pub fn steps(&self) -> Option<&'static [ManualStep]> {
        if self.manual_steps.is_empty() {
            None
        } else {
            Some(self.manual_steps)
        }
    }
}

/// Uppercase the first character of a slug (`"wave"` -> `"Wave"`).
#[must_use]
pub fn capitalize(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal record for registry tests.
    pub(crate) fn record(name: &'static str, description: &'static str) -> ComponentRecord {
        ComponentRecord {
            name,
            description,
            category: Category::Cards,
            preview: Preview::default_export("Fixture"),
            demo_source: "<Fixture />",
            implementation_source: "\"use client\";\nexport default function Fixture() {}",
            api_name: None,
            registry_path: "components/ui/fixture.tsx",
            extra_files: &[],
            cli_command: "npm i motion",
            manual_steps: &[],
            dependencies: &["motion"],
            dev_dependencies: &[],
            registry_dependencies: &[],
        }
    }
}
