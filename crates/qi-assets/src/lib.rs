//! Static assets for the QI component catalog.
//!
//! The catalog needs two files: `styles.css` (layout, CSS-only tabs, code
//! blocks) and `copy.js` (the clipboard button). They are served either
//! compiled into the binary or straight from `static/`:
//!
//! - **`embed` feature on**: assets are compiled in via `rust-embed`
//! - **`embed` feature off**: assets are read from this crate's `static/`
//!   directory at runtime, so edits show up without a rebuild

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::{Component, Path};

/// Embedded assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "static"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset serving (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Path of the stylesheet, relative to the asset root.
pub const STYLESHEET: &str = "styles.css";

/// Path of the copy-button script, relative to the asset root.
pub const COPY_SCRIPT: &str = "copy.js";

/// Get an asset by path (relative to `static/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
#[must_use]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to `static/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
/// Only plain relative paths are accepted; absolute paths, `..` and `.`
/// segments return `None`.
#[cfg(not(feature = "embed"))]
#[must_use]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    let relative = Path::new(path);
    let is_plain = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if path.is_empty() || !is_plain {
        return None;
    }
    let full_path = Path::new(DEV_DIR).join(relative);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Iterate all available asset paths.
#[cfg(feature = "embed")]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Iterate all available asset paths.
#[cfg(not(feature = "embed"))]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    let mut paths = walk_dir(Path::new(DEV_DIR));
    paths.sort();
    paths.into_iter().map(Cow::Owned)
}

/// Return the MIME type for the given file path.
#[must_use]
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

/// Recursively walk a directory and return paths relative to `base`.
#[cfg(not(feature = "embed"))]
fn walk_dir(base: &Path) -> Vec<String> {
    let mut result = Vec::new();
    walk_dir_inner(base, base, &mut result);
    result
}

#[cfg(not(feature = "embed"))]
fn walk_dir_inner(base: &Path, dir: &Path, result: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir_inner(base, &path, result);
        } else if let Ok(rel) = path.strip_prefix(base) {
            result.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_types() {
        assert_eq!(mime_for("styles.css"), "text/css");
        assert_eq!(mime_for("copy.js"), "text/javascript");
        assert_eq!(mime_for("index.html"), "text/html");
        assert_eq!(mime_for("registry.json"), "application/json");
    }

    #[test]
    fn test_mime_for_unknown_type() {
        assert_eq!(mime_for("file.unknown_ext_xyz"), "application/octet-stream");
    }

    #[test]
    fn test_bundled_assets_present() {
        let css = get(STYLESHEET).unwrap();
        assert!(std::str::from_utf8(&css).unwrap().contains(".tab-panel"));

        let js = get(COPY_SCRIPT).unwrap();
        assert!(std::str::from_utf8(&js).unwrap().contains("data-copy"));
    }

    #[test]
    fn test_iter_lists_bundled_assets() {
        let paths: Vec<_> = iter().collect();
        assert!(paths.iter().any(|p| p == STYLESHEET));
        assert!(paths.iter().any(|p| p == COPY_SCRIPT));
    }

    #[test]
    fn test_get_nonexistent_asset() {
        assert!(get("nonexistent_file_that_does_not_exist.txt").is_none());
    }

    #[cfg(not(feature = "embed"))]
    #[test]
    fn test_get_rejects_parent_segments() {
        assert!(get("../Cargo.toml").is_none());
    }

    #[cfg(not(feature = "embed"))]
    #[test]
    fn test_get_rejects_absolute_paths() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        assert!(std::path::Path::new(manifest).exists());
        assert!(get(manifest).is_none());
        assert!(get("/etc/passwd").is_none());
        assert!(get("./styles.css").is_none());
        assert!(get("").is_none());
    }
}
