use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use crate::catalog::{slug_display_name, to_slug, Catalog, TargetLookup, DEFAULT_TARGET};
use crate::generator::emitter::STYLES_FILE;
use crate::manifest::tree::{DirNode, DirTree};

/// URL prefix under which generated animation pages are served
pub const LIBRARY_URL: &str = "/components/animations/library";
/// URL prefix under which showcase components are served
pub const COMPONENTS_URL: &str = "/components";

/// One generated animation demo, as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Directory name the entry was discovered under
    pub name: String,
    pub display_name: String,
    pub id: String,
    pub class_name: String,
    pub path: String,
    pub css_path: String,
    pub targets: Vec<String>,
}

/// A standalone showcase component's entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    pub name: String,
    pub path: String,
}

/// The complete runtime index consumed by the showcase UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    /// Category slug to its animations, sorted by category slug
    pub animations: BTreeMap<String, Vec<ManifestEntry>>,
    pub components: Vec<ComponentEntry>,
}

impl Manifest {
    pub fn animation_count(&self) -> usize {
        self.animations.values().map(Vec::len).sum()
    }
}

/// Build the manifest from the catalog and directory snapshots
///
/// `library_tree` is the generated library directory (`None` when it does
/// not exist yet). `components_tree` is the components root; `library_path`
/// is a `/`-separated subtree of the components root to leave out of the
/// component list, if any.
pub fn build_manifest(
    catalog: &Catalog,
    library_tree: Option<&DirTree>,
    components_tree: Option<&DirTree>,
    library_path: Option<&str>,
) -> Result<Manifest> {
    let lookup = catalog.target_lookup()?;

    let animations = match library_tree {
        Some(tree) => index_animations(tree, &lookup)?,
        None => BTreeMap::new(),
    };

    Ok(Manifest {
        animations,
        components: components_tree
            .map(|tree| scan_components(tree, library_path))
            .unwrap_or_default(),
    })
}

/// Index the `<category>/<animation>/` directories of the library
///
/// Targets come from the catalog by `(category slug, animation slug)`;
/// directories with no catalog record get `["all"]`. When two category
/// directories share a slug, the one visited last (in name order) replaces
/// the earlier one's entries.
pub fn index_animations(
    library: &DirTree,
    lookup: &TargetLookup,
) -> Result<BTreeMap<String, Vec<ManifestEntry>>> {
    let mut index: BTreeMap<String, Vec<ManifestEntry>> = BTreeMap::new();

    for (category_dir, category_node) in library.root.children() {
        if !category_node.is_dir() {
            continue;
        }
        let category_slug = to_slug(category_dir)?;
        let mut entries = Vec::new();

        for (anim_dir, anim_node) in category_node.children() {
            if !anim_node.is_dir() {
                continue;
            }
            let anim_slug = to_slug(anim_dir)?;
            let targets = lookup
                .get(&(category_slug.clone(), anim_slug.clone()))
                .cloned()
                .unwrap_or_else(|| vec![DEFAULT_TARGET.to_string()]);

            let path = format!("{LIBRARY_URL}/{category_slug}/{anim_slug}");
            entries.push(ManifestEntry {
                name: anim_dir.clone(),
                display_name: slug_display_name(anim_dir),
                class_name: format!("ui-anim-{category_slug}-{anim_slug}"),
                css_path: format!("{path}/{STYLES_FILE}"),
                path,
                id: anim_slug,
                targets,
            });
        }

        if index.insert(category_slug.clone(), entries).is_some() {
            warn!(
                category = category_slug.as_str(),
                directory = category_dir.as_str(),
                "Category directories share a slug, keeping the last one"
            );
        }
    }

    Ok(index)
}

/// Collect component entry points from the components tree
///
/// An `.html` file is an entry point when its stem equals its parent
/// directory's name or is `index`. The component is named after the parent
/// directory with its first letter capitalized. Files under `skip` (a
/// `/`-separated path relative to the root) are ignored.
pub fn scan_components(tree: &DirTree, skip: Option<&str>) -> Vec<ComponentEntry> {
    let skip = skip.map(|s| s.trim_matches('/')).filter(|s| !s.is_empty());
    let mut results = Vec::new();
    walk_components(&tree.name, &tree.root, "", skip, &mut results);
    results
}

fn walk_components(
    dir_name: &str,
    node: &DirNode,
    relative: &str,
    skip: Option<&str>,
    results: &mut Vec<ComponentEntry>,
) {
    for (name, child) in node.children() {
        let child_path = if relative.is_empty() {
            name.clone()
        } else {
            format!("{relative}/{name}")
        };

        match child {
            DirNode::Dir(_) => {
                if skip == Some(child_path.as_str()) {
                    continue;
                }
                walk_components(name, child, &child_path, skip, results);
            }
            DirNode::File => {
                let Some(stem) = name.strip_suffix(".html") else {
                    continue;
                };
                if stem == dir_name || stem == "index" {
                    results.push(ComponentEntry {
                        name: capitalize(dir_name),
                        path: format!("{COMPONENTS_URL}/{child_path}"),
                    });
                }
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().to_string();
            result.push_str(chars.as_str());
            result
        }
    }
}
