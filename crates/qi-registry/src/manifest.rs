//! Registry API payloads.
//!
//! These are read-only projections of the [`Registry`]; nothing here is
//! stored. File contents are borrowed from the records verbatim.

use serde::Serialize;

use crate::record::ComponentRecord;
use crate::registry::Registry;

/// Manifest `type` of a component.
pub const COMPONENT_TYPE: &str = "registry:component";

/// Manifest `type` of a file entry.
pub const FILE_TYPE: &str = "registry:file";

/// One entry of the catalog index.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    /// Published name.
    pub name: &'a str,
    /// One-line summary.
    pub description: &'a str,
    /// Absolute URL of the component manifest.
    pub url: String,
}

/// Response body of the catalog index endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RegistryIndex<'a> {
    /// Entries in registry definition order.
    pub components: Vec<IndexEntry<'a>>,
}

impl<'a> RegistryIndex<'a> {
    /// Project the registry into an index served under `base_url`.
    ///
    /// `base_url` must not end with a slash.
    #[must_use]
    pub fn build(registry: &'a Registry, base_url: &str) -> Self {
        Self::with_urls(registry, |name| manifest_url(base_url, name))
    }

    /// Project the registry into an index, deriving each entry's URL from
    /// its published name.
    #[must_use]
    pub fn with_urls(registry: &'a Registry, url: impl Fn(&str) -> String) -> Self {
        let components = registry
            .list()
            .map(|summary| {
                let name = summary.api_name();
                IndexEntry {
                    name,
                    description: summary.record.description,
                    url: url(name),
                }
            })
            .collect();
        Self { components }
    }
}

/// URL of a component manifest under `base_url`.
#[must_use]
pub fn manifest_url(base_url: &str, name: &str) -> String {
    format!("{base_url}/api/registry/{name}")
}

/// File entry of a component manifest.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ManifestFile<'a> {
    /// Always [`FILE_TYPE`].
    #[serde(rename = "type")]
    pub file_type: &'static str,
    /// Path in the consumer's project.
    pub name: &'a str,
    /// File content, unmodified.
    pub content: &'a str,
}

/// Response body of the per-component endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentManifest<'a> {
    /// Always [`COMPONENT_TYPE`].
    #[serde(rename = "type")]
    pub component_type: &'static str,
    /// Published name.
    pub name: &'a str,
    /// One-line summary.
    pub description: &'a str,
    /// Implementation first, then any extra files.
    pub files: Vec<ManifestFile<'a>>,
    /// npm dependencies.
    pub dependencies: &'a [&'a str],
    /// npm dev dependencies.
    pub dev_dependencies: &'a [&'a str],
    /// Registry components this one builds on.
    pub registry_dependencies: &'a [&'a str],
}

impl<'a> ComponentManifest<'a> {
    /// Project a record into its manifest.
    #[must_use]
    pub fn from_record(slug: &'a str, record: &'a ComponentRecord) -> Self {
        let primary = ManifestFile {
            file_type: FILE_TYPE,
            name: record.registry_path,
            content: record.implementation_source,
        };
        let extra = record.extra_files.iter().map(|file| ManifestFile {
            file_type: FILE_TYPE,
            name: file.path,
            content: file.content,
        });

        Self {
            component_type: COMPONENT_TYPE,
            name: record.api_name(slug),
            description: record.description,
            files: std::iter::once(primary).chain(extra).collect(),
            dependencies: record.dependencies,
            dev_dependencies: record.dev_dependencies,
            registry_dependencies: record.registry_dependencies,
        }
    }

    /// Look up a published name or slug and project it, or `None` when
    /// nothing matches.
    #[must_use]
    pub fn lookup(registry: &'a Registry, name: &str) -> Option<Self> {
        registry
            .get_published(name)
            .map(|summary| Self::from_record(summary.slug, summary.record))
    }
}
