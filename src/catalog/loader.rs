use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{error, warn};

use crate::catalog::slug::to_slug;

/// Target list assigned to entries that do not name any target element types
pub const DEFAULT_TARGET: &str = "all";

/// A single animation entry from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationDescriptor {
    pub name: String,
    pub targets: Vec<String>,
}

impl AnimationDescriptor {
    pub fn new(name: impl Into<String>, targets: &[&str]) -> Self {
        Self {
            name: name.into(),
            targets: targets.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    /// Slug used as the animation's output directory name
    pub fn slug(&self) -> Result<String> {
        to_slug(&self.name)
    }
}

/// A named, ordered group of animations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub animations: Vec<AnimationDescriptor>,
}

impl Category {
    pub fn slug(&self) -> Result<String> {
        to_slug(&self.name)
    }
}

/// The parsed animation catalog, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

/// Lookup table from `(category slug, animation slug)` to target element types
pub type TargetLookup = HashMap<(String, String), Vec<String>>;

/// Catalog entries come either as full descriptors or as bare names
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Name(String),
    Descriptor {
        name: String,
        #[serde(default)]
        targets: Option<Vec<String>>,
    },
}

impl From<RawEntry> for AnimationDescriptor {
    fn from(raw: RawEntry) -> Self {
        match raw {
            RawEntry::Name(name) => Self::new(name, &[DEFAULT_TARGET]),
            RawEntry::Descriptor { name, targets } => Self {
                name,
                targets: targets.unwrap_or_else(|| vec![DEFAULT_TARGET.to_string()]),
            },
        }
    }
}

impl Catalog {
    /// Total number of animations across all categories
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.animations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(category, animation)` pairs in source order
    pub fn entries(&self) -> impl Iterator<Item = (&Category, &AnimationDescriptor)> {
        self.categories
            .iter()
            .flat_map(|c| c.animations.iter().map(move |a| (c, a)))
    }

    /// Parse a catalog from JSON text
    ///
    /// The top level is an object mapping category names to entry arrays. A
    /// top-level value that is itself an object is treated as a wrapper and
    /// its members are read as categories.
    pub fn from_json(content: &str) -> Result<Self> {
        let root: Map<String, Value> =
            serde_json::from_str(content).context("Catalog must be a JSON object")?;

        let mut catalog = Catalog::default();
        collect_categories(root, 0, &mut catalog.categories);
        Ok(catalog)
    }

    /// Build the `(category slug, animation slug) -> targets` table
    ///
    /// Later entries with the same slug pair overwrite earlier ones.
    pub fn target_lookup(&self) -> Result<TargetLookup> {
        self.entries()
            .map(|(category, animation)| {
                Ok::<_, anyhow::Error>((
                    (category.slug()?, animation.slug()?),
                    animation.targets.clone(),
                ))
            })
            .collect()
    }
}

fn collect_categories(object: Map<String, Value>, depth: usize, out: &mut Vec<Category>) {
    for (key, value) in object {
        match value {
            Value::Array(items) => out.push(parse_category(key, items)),
            Value::Object(nested) if depth == 0 => collect_categories(nested, depth + 1, out),
            other => {
                warn!(
                    category = key.as_str(),
                    kind = value_kind(&other),
                    "Skipping catalog entry that is not a list of animations"
                );
            }
        }
    }
}

fn parse_category(name: String, items: Vec<Value>) -> Category {
    let mut animations = Vec::with_capacity(items.len());

    for item in items {
        match serde_json::from_value::<RawEntry>(item) {
            Ok(raw) => animations.push(raw.into()),
            Err(err) => {
                warn!(category = name.as_str(), error = %err, "Skipping malformed animation entry");
            }
        }
    }

    Category { name, animations }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read and parse the catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    Catalog::from_json(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))
}

/// Read the catalog, degrading to an empty catalog on any failure
///
/// Failures are logged; callers proceed with zero entries.
pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            let detail = format!("{err:#}");
            error!(
                path = %path.display(),
                error = detail.as_str(),
                "Catalog unavailable, continuing with no entries"
            );
            Catalog::default()
        }
    }
}
