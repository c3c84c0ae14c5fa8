//! Catalog site for the QI component registry.
//!
//! Renders the browsable side of the registry as server-side HTML:
//!
//! - [`CatalogPage`]: index grid, per-component detail page, not-found page
//! - [`CodeBlock`]: read-only snippet with line numbers and a copy button
//! - [`CopyButton`]: the copy affordance, over any [`Clipboard`]
//! - [`PreviewSource`]: on-demand loading of live previews
//! - [`SiteBuilder`]: static export of every page and API payload
//!
//! # Example
//!
//! ```no_run
//! use qi_registry::Registry;
//! use qi_site::{CatalogPage, NoPreviews};
//!
//! # async fn example() {
//! let page = CatalogPage::new(Registry::builtin(), "QI");
//! let html = page.render(Some("wave"), &NoPreviews).await.into_html();
//! assert!(html.contains("<h1>Wave</h1>"));
//! # }
//! ```

mod builder;
mod code_block;
mod copy;
mod html;
mod layout;
mod page;
mod preview;

pub use builder::{BuildError, BuildReport, SiteBuilder};
pub use code_block::CodeBlock;
pub use copy::{COPIED_WINDOW, Clipboard, ClipboardError, CopyButton, CopyState, SystemClipboard};
pub use page::{CatalogPage, PageOutcome};
pub use preview::{
    FALLBACK_TEXT, FsPreviewSource, NoPreviews, PreviewError, PreviewModule, PreviewSource,
    PreviewState, load_preview,
};
