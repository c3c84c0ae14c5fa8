//! Static export of the catalog.
//!
//! Every valid slug is enumerated ahead of time and written out together
//! with the registry API payloads, so the whole site can be served from any
//! static file host.

use std::path::{Path, PathBuf};

use qi_registry::{ComponentManifest, Registry, RegistryIndex};
use serde::Serialize;

use crate::page::CatalogPage;
use crate::preview::{PreviewSource, load_preview};

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Writing an output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// An asset listed by the asset bundle could not be read.
    #[error("Missing asset: {0}")]
    MissingAsset(String),
}

/// Counts of written files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// HTML documents.
    pub pages: usize,
    /// JSON payloads.
    pub payloads: usize,
    /// Copied assets.
    pub assets: usize,
}

/// Builds a static copy of the catalog site.
pub struct SiteBuilder<'a> {
    registry: &'a Registry,
    previews: &'a dyn PreviewSource,
    site_title: &'a str,
    base_url: &'a str,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder.
    ///
    /// `base_url` is embedded in the registry index and must not end with
    /// a slash.
    #[must_use]
    pub fn new(
        registry: &'a Registry,
        previews: &'a dyn PreviewSource,
        site_title: &'a str,
        base_url: &'a str,
    ) -> Self {
        Self {
            registry,
            previews,
            site_title,
            base_url,
        }
    }

    /// Write the site into `out_dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if any file can't be written.
    pub async fn build(&self, out_dir: &Path) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport::default();
        let page = CatalogPage::new(self.registry, self.site_title);

        let index = page.index();
        write_file(&out_dir.join("index.html"), index.as_bytes()).await?;
        write_file(&out_dir.join("components/index.html"), index.as_bytes()).await?;
        write_file(&out_dir.join("404.html"), page.not_found().as_bytes()).await?;
        report.pages += 3;

        let registry_index = RegistryIndex::with_urls(self.registry, |name| {
            format!("{}/{}", self.base_url, manifest_file(name))
        });
        write_json(&out_dir.join("api/registry.json"), &registry_index).await?;
        write_json(&out_dir.join("api/registry/index.json"), &registry_index).await?;
        report.payloads += 2;

        for summary in self.registry.list() {
            let slug = summary.slug;
            let preview = load_preview(self.previews, &summary.record.preview).await;
            if let Some(html) = page.detail(slug, &preview) {
                let path = out_dir.join("components").join(slug).join("index.html");
                write_file(&path, html.as_bytes()).await?;
                report.pages += 1;
            }

            let name = summary.api_name();
            let manifest = ComponentManifest::from_record(slug, summary.record);
            write_json(&out_dir.join(manifest_file(name)), &manifest).await?;
            write_json(&out_dir.join(format!("r/{name}.json")), &manifest).await?;
            report.payloads += 2;
        }

        for asset in qi_assets::iter() {
            let data =
                qi_assets::get(&asset).ok_or_else(|| BuildError::MissingAsset(asset.to_string()))?;
            write_file(&out_dir.join("assets").join(&*asset), &data).await?;
            report.assets += 1;
        }

        tracing::info!(
            out_dir = %out_dir.display(),
            pages = report.pages,
            payloads = report.payloads,
            assets = report.assets,
            "Static site built"
        );

        Ok(report)
    }
}

/// Exported manifest path of a published name, relative to the site root.
///
/// Static hosts don't map `/api/registry/{name}` onto a `.json` file, so
/// the exported index links to the file itself.
fn manifest_file(name: &str) -> String {
    format!("api/registry/{name}.json")
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BuildError> {
    let mut body = serde_json::to_vec_pretty(value)?;
    body.push(b'\n');
    write_file(path, &body).await
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), BuildError> {
    let io_error = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(path, contents).await.map_err(io_error)
}
