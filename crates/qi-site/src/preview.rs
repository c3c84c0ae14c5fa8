//! Live previews for the "Demo" tab.
//!
//! Previews are prebuilt HTML fragments grouped into modules, one module
//! per showcased component. A [`PreviewSource`] loads a module on demand;
//! [`load_preview`] then picks the export the record declares. Anything that
//! goes wrong degrades to [`PreviewState::Fallback`] and never fails the page.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use qi_registry::Preview;

/// Text shown when no preview can be rendered.
pub const FALLBACK_TEXT: &str = "No preview available.";

/// File extension of preview fragments.
const FRAGMENT_EXTENSION: &str = "html";

/// Error loading a preview module.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The source has no module with this name.
    #[error("Preview module not found: {0}")]
    ModuleNotFound(String),
    /// Reading the module failed.
    #[error("Failed to read preview module {module}: {source}")]
    Io {
        /// Module name.
        module: String,
        /// Underlying error.
        source: io::Error,
    },
}

/// A loaded preview module: export key to rendered HTML fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewModule {
    exports: BTreeMap<String, String>,
}

impl PreviewModule {
    /// Create an empty module.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an export.
    #[must_use]
    pub fn with_export(mut self, key: impl Into<String>, html: impl Into<String>) -> Self {
        self.exports.insert(key.into(), html.into());
        self
    }

    /// Fragment of the given export, if the module has it.
    #[must_use]
    pub fn export(&self, key: &str) -> Option<&str> {
        self.exports.get(key).map(String::as_str)
    }

    /// Export keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }
}

/// Asynchronous provider of preview modules.
#[async_trait]
pub trait PreviewSource: Send + Sync {
    /// Load a module by name.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ModuleNotFound`] if the source has no such
    /// module, or [`PreviewError::Io`] if it exists but can't be read.
    async fn load(&self, module: &str) -> Result<PreviewModule, PreviewError>;
}

/// Source with no modules at all.
///
/// Used when no preview directory is configured; every page shows the
/// fallback text.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPreviews;

#[async_trait]
impl PreviewSource for NoPreviews {
    async fn load(&self, module: &str) -> Result<PreviewModule, PreviewError> {
        Err(PreviewError::ModuleNotFound(module.to_owned()))
    }
}

/// Preview modules stored as directories of HTML fragments.
///
/// Layout: `<dir>/<module>/<export>.html`, e.g. `previews/Plan/Card.html`
/// or `previews/Wave/default.html`.
#[derive(Clone, Debug)]
pub struct FsPreviewSource {
    dir: PathBuf,
}

impl FsPreviewSource {
    /// Create a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl PreviewSource for FsPreviewSource {
    async fn load(&self, module: &str) -> Result<PreviewModule, PreviewError> {
        if !is_module_name(module) {
            return Err(PreviewError::ModuleNotFound(module.to_owned()));
        }

        let io_error = |source: io::Error| {
            if source.kind() == io::ErrorKind::NotFound {
                PreviewError::ModuleNotFound(module.to_owned())
            } else {
                PreviewError::Io {
                    module: module.to_owned(),
                    source,
                }
            }
        };

        let module_dir = self.dir.join(module);
        let mut entries = tokio::fs::read_dir(&module_dir).await.map_err(io_error)?;
        let mut loaded = PreviewModule::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FRAGMENT_EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let html = tokio::fs::read_to_string(&path).await.map_err(io_error)?;
            loaded.exports.insert(key.to_owned(), html);
        }

        Ok(loaded)
    }
}

/// Module names are single path segments.
fn is_module_name(module: &str) -> bool {
    !module.is_empty()
        && module != "."
        && module != ".."
        && !module.contains(['/', '\\'])
}

/// Outcome of resolving a record's preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewState {
    /// Rendered fragment of the declared export.
    Ready(String),
    /// Text fallback; see [`FALLBACK_TEXT`].
    Fallback,
}

/// Load the module named by `preview` and select its declared export.
///
/// Never fails: a missing module, an I/O error, or a module without the
/// declared export is logged and yields [`PreviewState::Fallback`].
pub async fn load_preview(source: &dyn PreviewSource, preview: &Preview) -> PreviewState {
    let module = match source.load(preview.module).await {
        Ok(module) => module,
        Err(PreviewError::ModuleNotFound(_)) => {
            tracing::debug!(module = %preview.module, "No preview module");
            return PreviewState::Fallback;
        }
        Err(e) => {
            tracing::warn!(module = %preview.module, error = %e, "Failed to load preview");
            return PreviewState::Fallback;
        }
    };

    let key = preview.export.key();
    match module.export(key) {
        Some(html) => PreviewState::Ready(html.to_owned()),
        None => {
            tracing::warn!(
                module = %preview.module,
                export = %key,
                available = ?module.keys().collect::<Vec<_>>(),
                "Preview module has no such export"
            );
            PreviewState::Fallback
        }
    }
}
