//! Slug to record mapping.
//!
//! The [`Registry`] is the single source of truth for the catalog. The
//! index page, the sidebar, the registry API and the static export are all
//! projections of it.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::record::ComponentRecord;

/// Summary of a registry entry, as listed on index pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary<'a> {
    /// Registry slug.
    pub slug: &'a str,
    /// The full record.
    pub record: &'a ComponentRecord,
}

impl<'a> Summary<'a> {
    /// Name published by the registry API.
    #[must_use]
    pub fn api_name(&self) -> &'a str {
        self.record.api_name(self.slug)
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> String {
        self.record.title(self.slug)
    }

    /// URL of the catalog detail page.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/components/{}", self.slug)
    }
}

/// Immutable catalog of components keyed by slug.
///
/// Definition order is preserved for listing; lookups go through a hash
/// index. Duplicate slugs keep the first definition and are reported by
/// [`Registry::check`].
#[derive(Debug)]
pub struct Registry {
    entries: Vec<(&'static str, ComponentRecord)>,
    index: HashMap<&'static str, usize>,
    api_index: HashMap<&'static str, usize>,
}

/// Static data defect found by [`Registry::check`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// The same slug is defined more than once.
    DuplicateSlug(String),
    /// Slug contains characters other than lowercase ASCII, digits or `-`.
    InvalidSlug(String),
    /// Record has an empty description.
    EmptyDescription(String),
    /// Record has no implementation source.
    EmptySource(String),
    /// A manual step has an empty title or code.
    EmptyStep {
        /// Owning slug.
        slug: String,
        /// Zero-based step index.
        index: usize,
    },
    /// An API name collides with another record's slug or API name.
    ApiNameConflict {
        /// Owning slug.
        slug: String,
        /// Colliding API name.
        name: String,
    },
    /// Two manifest files share a path.
    DuplicateFile {
        /// Owning slug.
        slug: String,
        /// Repeated path.
        path: String,
    },
}

impl std::fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSlug(slug) => write!(f, "duplicate slug '{slug}'"),
            Self::InvalidSlug(slug) => write!(f, "slug '{slug}' is not URL-safe"),
            Self::EmptyDescription(slug) => write!(f, "'{slug}' has an empty description"),
            Self::EmptySource(slug) => write!(f, "'{slug}' has no implementation source"),
            Self::EmptyStep { slug, index } => {
                write!(f, "'{slug}' manual step {} is empty", index + 1)
            }
            Self::ApiNameConflict { slug, name } => {
                write!(f, "'{slug}' API name '{name}' is already taken")
            }
            Self::DuplicateFile { slug, path } => {
                write!(f, "'{slug}' ships '{path}' more than once")
            }
        }
    }
}

impl Registry {
    /// Build a registry from definitions, in order.
    #[must_use]
    pub fn new(entries: Vec<(&'static str, ComponentRecord)>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, (slug, _)) in entries.iter().enumerate() {
            if index.contains_key(slug) {
                tracing::warn!(slug = %slug, "Duplicate registry slug, keeping first definition");
                continue;
            }
            index.insert(*slug, position);
        }

        let mut api_index = HashMap::with_capacity(entries.len());
        for (position, (slug, record)) in entries.iter().enumerate() {
            if index.get(slug) != Some(&position) {
                continue;
            }
            if let Some(name) = record.api_name {
                api_index.entry(name).or_insert(position);
            }
        }

        Self {
            entries,
            index,
            api_index,
        }
    }

    /// Look up a record by slug.
    ///
    /// Absence is a normal outcome, not an error.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ComponentRecord> {
        self.index.get(slug).map(|&position| &self.entries[position].1)
    }

    /// Look up a record by the name the registry API publishes.
    ///
    /// Accepts the record's API name (`feature-list`) as well as its slug
    /// (`featurelist`).
    #[must_use]
    pub fn get_published(&self, name: &str) -> Option<Summary<'_>> {
        let position = self
            .api_index
            .get(name)
            .or_else(|| self.index.get(name))?;
        let (slug, record) = &self.entries[*position];
        Some(Summary {
            slug: *slug,
            record,
        })
    }

    /// Iterate entries in definition order.
    ///
    /// Each call returns a fresh iterator; the order is stable across calls.
    pub fn list(&self) -> impl Iterator<Item = Summary<'_>> {
        self.live_entries()
            .map(|(slug, record)| Summary { slug, record })
    }

    /// All slugs in definition order, for static generation.
    pub fn slugs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.live_entries().map(|(slug, _)| slug)
    }

    /// Definitions that won their slug, in order.
    fn live_entries(&self) -> impl Iterator<Item = (&'static str, &ComponentRecord)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(position, (slug, _))| self.index.get(slug) == Some(position))
            .map(|(_, (slug, record))| (*slug, record))
    }

    /// Number of distinct slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Find static data defects.
    ///
    /// Runs over every definition, including shadowed duplicates. Meant for
    /// tests and `qi check`, never for request handling.
    #[must_use]
    pub fn check(&self) -> Vec<Inconsistency> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for (slug, record) in &self.entries {
            if !seen.insert(*slug) {
                problems.push(Inconsistency::DuplicateSlug((*slug).to_owned()));
            }
            if !is_url_safe(slug) {
                problems.push(Inconsistency::InvalidSlug((*slug).to_owned()));
            }
            if record.description.trim().is_empty() {
                problems.push(Inconsistency::EmptyDescription((*slug).to_owned()));
            }
            if record.implementation_source.trim().is_empty() {
                problems.push(Inconsistency::EmptySource((*slug).to_owned()));
            }
            for (index, step) in record.manual_steps.iter().enumerate() {
                if step.title.trim().is_empty() || step.code.trim().is_empty() {
                    problems.push(Inconsistency::EmptyStep {
                        slug: (*slug).to_owned(),
                        index,
                    });
                }
            }

            if let Some(name) = record.api_name {
                let taken = !is_url_safe(name)
                    || self.index.get(name).is_some_and(|&p| self.entries[p].0 != *slug)
                    || self
                        .entries
                        .iter()
                        .any(|(other, r)| other != slug && r.api_name == Some(name));
                if taken {
                    problems.push(Inconsistency::ApiNameConflict {
                        slug: (*slug).to_owned(),
                        name: name.to_owned(),
                    });
                }
            }

            let mut paths = HashSet::new();
            let files = std::iter::once(record.registry_path)
                .chain(record.extra_files.iter().map(|file| file.path));
            for path in files {
                if !paths.insert(path) {
                    problems.push(Inconsistency::DuplicateFile {
                        slug: (*slug).to_owned(),
                        path: path.to_owned(),
                    });
                }
            }
        }

        problems
    }
}

/// Whether a slug is safe to embed in a URL path segment.
fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record;
    use crate::record::{ManualStep, SourceFile};
    use pretty_assertions::assert_eq;

    fn sample() -> Registry {
        Registry::new(vec![
            ("list", record("List", "List card")),
            ("wave", record("Wave", "Wave animation")),
        ])
    }

    #[test]
    fn test_get_existing_slug() {
        let registry = sample();
        let record = registry.get("wave").unwrap();
        assert_eq!(record.name, "Wave");
    }

    #[test]
    fn test_get_missing_slug_returns_none() {
        let registry = sample();
        assert!(registry.get("missing").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_list_preserves_definition_order() {
        let registry = Registry::new(vec![
            ("wave", record("Wave", "Wave animation")),
            ("list", record("List", "List card")),
            ("graph", record("Graph", "Graph")),
        ]);
        let slugs: Vec<_> = registry.list().map(|s| s.slug).collect();
        assert_eq!(slugs, vec!["wave", "list", "graph"]);
    }

    #[test]
    fn test_list_is_restartable_and_stable() {
        let registry = sample();
        let first: Vec<_> = registry.list().map(|s| s.slug).collect();
        let second: Vec<_> = registry.list().map(|s| s.slug).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_href_and_title() {
        let registry = Registry::new(vec![("plan", record("", "Pricing card"))]);
        let summary = registry.list().next().unwrap();
        assert_eq!(summary.href(), "/components/plan");
        assert_eq!(summary.title(), "Plan");
    }

    #[test]
    fn test_duplicate_slug_keeps_first_definition() {
        let registry = Registry::new(vec![
            ("list", record("First", "first")),
            ("list", record("Second", "second")),
        ]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("list").unwrap().name, "First");
        assert_eq!(registry.list().count(), 1);
        assert_eq!(
            registry.check(),
            vec![Inconsistency::DuplicateSlug("list".to_owned())]
        );
    }

    #[test]
    fn test_slugs_match_list() {
        let registry = sample();
        let slugs: Vec<_> = registry.slugs().collect();
        assert_eq!(slugs, vec!["list", "wave"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new(Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.list().count(), 0);
        assert!(registry.check().is_empty());
    }

    #[test]
    fn test_check_reports_invalid_slug() {
        let registry = Registry::new(vec![("Glass Navbar", record("Glass", "Navbar"))]);
        assert_eq!(
            registry.check(),
            vec![Inconsistency::InvalidSlug("Glass Navbar".to_owned())]
        );
    }

    #[test]
    fn test_check_reports_empty_step() {
        static STEPS: [ManualStep; 1] = [ManualStep {
            title: "Install dependencies",
            code: "",
            language: "bash",
            filename: None,
        }];
        let mut broken = record("List", "List card");
        broken.manual_steps = &STEPS;
        let registry = Registry::new(vec![("list", broken)]);

        assert_eq!(
            registry.check(),
            vec![Inconsistency::EmptyStep {
                slug: "list".to_owned(),
                index: 0
            }]
        );
    }

    #[test]
    fn test_check_reports_duplicate_manifest_file() {
        static FILES: [SourceFile; 1] = [SourceFile {
            path: "components/ui/fixture.tsx",
            content: "export {}",
        }];
        let mut broken = record("List", "List card");
        broken.extra_files = &FILES;
        let registry = Registry::new(vec![("list", broken)]);

        let problems = registry.check();
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].to_string(),
            "'list' ships 'components/ui/fixture.tsx' more than once"
        );
    }

    #[test]
    fn test_get_published_by_api_name_or_slug() {
        let mut features = record("Feature List", "Features");
        features.api_name = Some("feature-list");
        let registry = Registry::new(vec![
            ("list", record("List", "List card")),
            ("featurelist", features),
        ]);

        let by_name = registry.get_published("feature-list").unwrap();
        assert_eq!(by_name.slug, "featurelist");
        assert_eq!(registry.get_published("featurelist").unwrap().slug, "featurelist");
        assert_eq!(registry.get_published("list").unwrap().slug, "list");
        assert!(registry.get_published("feature_list").is_none());
        assert!(registry.get("feature-list").is_none());
    }

    #[test]
    fn test_check_reports_api_name_taken_by_other_slug() {
        let mut wave = record("Wave", "Wave animation");
        wave.api_name = Some("list");
        let registry = Registry::new(vec![
            ("list", record("List", "List card")),
            ("wave", wave),
        ]);

        assert_eq!(
            registry.check(),
            vec![Inconsistency::ApiNameConflict {
                slug: "wave".to_owned(),
                name: "list".to_owned(),
            }]
        );
    }

    #[test]
    fn test_is_url_safe() {
        assert!(is_url_safe("glassnavbar"));
        assert!(is_url_safe("feature-list"));
        assert!(!is_url_safe(""));
        assert!(!is_url_safe("a/b"));
        assert!(!is_url_safe("Wave"));
    }
}
