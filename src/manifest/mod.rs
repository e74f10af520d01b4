//! # Manifest Module
//!
//! Builds the static index (`manifest.js`) the showcase front end loads to
//! discover generated animation demos and standalone components.
//!
//! The builder is a separate pass over what is already on disk: it snapshots
//! the library and components directories into [`tree::DirTree`] values and
//! derives the index from those snapshots and the catalog, without looking
//! at any in-memory generation result.
//!
//! ## Output
//!
//! ```text
//! const UI_MANIFEST = {
//!     animations: { "<category-slug>": [ { name, displayName, id, className, path, cssPath, targets } ] },
//!     components: [ { name, path } ]
//! };
//! ```

pub mod builder;
pub mod tree;
pub mod writer;

pub use builder::{
    build_manifest, index_animations, scan_components, ComponentEntry, Manifest, ManifestEntry,
};
pub use tree::{DirNode, DirTree};
pub use writer::{render_manifest, write_manifest};

use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::catalog::{load_catalog_or_empty, Catalog};

/// Snapshot the directories, read the catalog and build the manifest
///
/// A missing library or components directory contributes an empty section.
/// An unreadable catalog degrades to an empty target lookup. Generated pages
/// under the components directory are listed as components too, unless
/// `exclude_library` is set.
pub fn build_from_disk(
    catalog_path: &Path,
    library_dir: &Path,
    components_dir: &Path,
    exclude_library: bool,
) -> Result<Manifest> {
    let library_tree = DirTree::scan(library_dir)?;
    if library_tree.is_none() {
        info!(
            library = %library_dir.display(),
            "Animations library directory does not exist, skipping animation scan"
        );
    }

    let catalog = match library_tree {
        Some(_) => load_catalog_or_empty(catalog_path),
        None => Catalog::default(),
    };

    let components_tree = DirTree::scan(components_dir)?;
    let library_path = if exclude_library {
        library_relative_path(library_dir, components_dir)
    } else {
        None
    };

    build_manifest(
        &catalog,
        library_tree.as_ref(),
        components_tree.as_ref(),
        library_path.as_deref(),
    )
}

/// The library's `/`-separated location inside the components directory
fn library_relative_path(library_dir: &Path, components_dir: &Path) -> Option<String> {
    let relative = library_dir.strip_prefix(components_dir).ok()?;
    let parts: Vec<_> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
