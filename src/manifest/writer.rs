use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

use crate::manifest::builder::Manifest;

/// Serialize a value as JSON indented with four spaces
fn to_json_4(value: &impl Serialize) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize manifest")?;
    String::from_utf8(buf).context("Manifest JSON was not valid UTF-8")
}

/// Render the manifest as a script defining the `UI_MANIFEST` global
///
/// The definition is also exported through `module.exports` when loaded
/// outside a browser.
pub fn render_manifest(manifest: &Manifest) -> Result<String> {
    let animations = to_json_4(&manifest.animations)?;
    let components = to_json_4(&manifest.components)?;

    Ok(format!(
        r#"
// Auto-generated manifest
const UI_MANIFEST = {{
    animations: {animations},
    components: {components}
}};

if (typeof module !== 'undefined') {{
    module.exports = UI_MANIFEST;
}}
"#
    ))
}

/// Render and write the manifest file, creating its parent directory
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<()> {
    let content = render_manifest(manifest)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create manifest directory: {}", parent.display())
        })?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write manifest: {}", path.display()))?;

    Ok(())
}
