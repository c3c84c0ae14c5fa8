//! Component registry for the QI component library.
//!
//! The registry maps URL-safe slugs to [`ComponentRecord`]s: display
//! metadata, demo and implementation sources, install instructions and a
//! preview reference. It is built once from compiled-in definitions and
//! never mutated.
//!
//! Everything user-facing is a projection of the one [`Registry`]:
//!
//! - the catalog index and sidebar ([`Registry::list`])
//! - the registry API payloads ([`RegistryIndex`], [`ComponentManifest`])
//! - static page generation ([`Registry::slugs`])
//!
//! ```
//! use qi_registry::{ComponentManifest, Registry};
//!
//! let registry = Registry::builtin();
//! let wave = ComponentManifest::lookup(registry, "wave").unwrap();
//! assert_eq!(wave.files[0].name, "components/ui/wave.tsx");
//! assert!(registry.get("does-not-exist").is_none());
//! ```

mod catalog;
mod manifest;
mod record;
mod registry;

pub use manifest::{
    COMPONENT_TYPE, ComponentManifest, FILE_TYPE, IndexEntry, ManifestFile, RegistryIndex,
    manifest_url,
};
pub use record::{
    Category, ComponentRecord, ManualStep, Preview, PreviewExport, SourceFile, capitalize,
};
pub use registry::{Inconsistency, Registry, Summary};
