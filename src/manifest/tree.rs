//! Abstract directory trees
//!
//! The manifest builder works on an in-memory snapshot of a directory rather
//! than on the filesystem, so the classification rules can be tested against
//! synthetic trees. [`DirTree::scan`] takes the snapshot from disk.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::warn;
use walkdir::WalkDir;

/// A file or a directory with named children
///
/// Children are kept sorted by name so traversal order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirNode {
    File,
    Dir(BTreeMap<String, DirNode>),
}

impl DirNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, DirNode::Dir(_))
    }

    /// Children of a directory; files have none
    pub fn children(&self) -> impl Iterator<Item = (&String, &DirNode)> {
        let map = match self {
            DirNode::Dir(children) => Some(children),
            DirNode::File => None,
        };
        map.into_iter().flat_map(|m| m.iter())
    }
}

/// A named root directory and everything beneath it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTree {
    /// Base name of the root directory
    pub name: String,
    pub root: DirNode,
}

impl DirTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: DirNode::Dir(BTreeMap::new()),
        }
    }

    /// Build a tree from `/`-separated relative paths
    ///
    /// A trailing `/` marks an (possibly empty) directory; anything else is a
    /// file. Intermediate directories are created as needed.
    pub fn from_paths(name: impl Into<String>, paths: &[&str]) -> Self {
        let mut tree = Self::new(name);
        for path in paths {
            let is_dir = path.ends_with('/');
            let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
            tree.insert(&parts, is_dir);
        }
        tree
    }

    /// Snapshot a directory from disk
    ///
    /// Returns `Ok(None)` when `dir` does not exist. Symlinks are followed;
    /// a link back to one of its own ancestors is skipped with a warning.
    pub fn scan(dir: &Path) -> Result<Option<Self>> {
        if !dir.exists() {
            return Ok(None);
        }
        if !dir.is_dir() {
            anyhow::bail!("Path '{}' exists but is not a directory", dir.display());
        }

        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        let mut tree = Self::new(name);

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.loop_ancestor().is_some() => {
                    warn!(
                        path = ?err.path(),
                        "Skipping symlink that loops back to an ancestor directory"
                    );
                    continue;
                }
                Err(err) => {
                    return Err(err)
                        .with_context(|| format!("Failed to read directory: {}", dir.display()))
                }
            };
            let relative = entry
                .path()
                .strip_prefix(dir)
                .with_context(|| format!("Unexpected path: {}", entry.path().display()))?;

            let parts: Vec<&str> = relative
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => part.to_str(),
                    _ => None,
                })
                .collect();
            if parts.len() != relative.components().count() {
                warn!(path = %entry.path().display(), "Skipping path that is not valid UTF-8");
                continue;
            }

            tree.insert(&parts, entry.file_type().is_dir());
        }

        Ok(Some(tree))
    }

    /// Look up a node by `/`-separated relative path; the empty path is the root
    pub fn get(&self, path: &str) -> Option<&DirNode> {
        let mut node = &self.root;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            node = match node {
                DirNode::Dir(children) => children.get(part)?,
                DirNode::File => return None,
            };
        }
        Some(node)
    }

    fn insert(&mut self, parts: &[&str], is_dir: bool) {
        let mut node = &mut self.root;
        for (i, part) in parts.iter().enumerate() {
            let last = i + 1 == parts.len();
            let current = node;
            node = match current {
                DirNode::Dir(children) => {
                    children.entry((*part).to_string()).or_insert_with(|| {
                        if last && !is_dir {
                            DirNode::File
                        } else {
                            DirNode::Dir(BTreeMap::new())
                        }
                    })
                }
                DirNode::File => return,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_paths_builds_nested_structure() {
        let tree = DirTree::from_paths("components", &["foo/foo.html", "foo/img/", "bar.css"]);

        assert_eq!(tree.name, "components");
        assert!(tree.get("").unwrap().is_dir());
        assert!(tree.get("foo").unwrap().is_dir());
        assert_eq!(tree.get("foo/foo.html"), Some(&DirNode::File));
        assert!(tree.get("foo/img").unwrap().is_dir());
        assert_eq!(tree.get("bar.css"), Some(&DirNode::File));
        assert_eq!(tree.get("missing"), None);
        assert_eq!(tree.get("bar.css/child"), None);
    }

    #[test]
    fn test_children_are_sorted() {
        let tree = DirTree::from_paths("root", &["zeta/", "alpha/", "mid.txt"]);
        let names: Vec<_> = tree.root.children().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid.txt", "zeta"]);
        assert_eq!(DirNode::File.children().count(), 0);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = DirTree::scan(&temp_dir.path().join("nope")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_scan_file_instead_of_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        let result = DirTree::scan(&file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_scan_matches_synthetic_tree() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("components");
        fs::create_dir_all(root.join("foo")).unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();
        fs::write(root.join("foo").join("foo.html"), "<div></div>").unwrap();
        fs::write(root.join("readme.md"), "# hi").unwrap();

        let scanned = DirTree::scan(&root).unwrap().unwrap();
        let expected =
            DirTree::from_paths("components", &["foo/foo.html", "empty/", "readme.md"]);
        assert_eq!(scanned, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinked_directories() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let shared = temp_dir.path().join("shared").join("dock");
        fs::create_dir_all(&shared).unwrap();
        fs::write(shared.join("dock.html"), "<nav></nav>").unwrap();

        let root = temp_dir.path().join("components");
        fs::create_dir_all(&root).unwrap();
        symlink(&shared, root.join("dock")).unwrap();

        let scanned = DirTree::scan(&root).unwrap().unwrap();
        assert!(scanned.get("dock").unwrap().is_dir());
        assert_eq!(scanned.get("dock/dock.html"), Some(&DirNode::File));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_symlink_loops() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("components");
        fs::create_dir_all(root.join("foo")).unwrap();
        fs::write(root.join("foo").join("foo.html"), "<div></div>").unwrap();
        symlink(&root, root.join("foo").join("back")).unwrap();

        let scanned = DirTree::scan(&root).unwrap().unwrap();
        assert_eq!(scanned.get("foo/foo.html"), Some(&DirNode::File));
        assert_eq!(scanned.get("foo/back"), None);
    }
}
