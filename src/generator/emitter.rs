use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::catalog::{category_display_name, to_slug, Catalog};
use crate::error::GenerateError;
use crate::generator::resolver::{matching_rules, resolve};
use crate::generator::templates::escape_html;
use crate::generator::DemoConfig;

/// File name of the generated preview document
pub const PAGE_FILE: &str = "index.html";
/// File name of the generated stylesheet
pub const STYLES_FILE: &str = "styles.css";

/// What to do when two catalog entries map to the same output directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Log a warning; the later entry overwrites the earlier one's pages
    #[default]
    Warn,
    /// Abort before writing anything
    Error,
}

/// Two catalog entries sharing a `(category slug, animation slug)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSlug {
    pub category_slug: String,
    pub slug: String,
    pub first: String,
    pub second: String,
}

/// Summary of one generation sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of catalog entries to write, excluding skipped ones
    pub total: usize,
    /// Number of pages written
    pub generated: usize,
    /// Names skipped because their slug (or their category's) was empty
    pub skipped: Vec<String>,
    pub duplicates: Vec<DuplicateSlug>,
    /// Directories written, in catalog order
    pub pages: Vec<PathBuf>,
}

/// Output directory for one animation: `<library>/<category-slug>/<animation-slug>`
pub fn page_dir(library_dir: &Path, category: &str, animation_name: &str) -> Result<PathBuf> {
    Ok(library_dir
        .join(to_slug(category)?)
        .join(to_slug(animation_name)?))
}

const STYLESHEET_LINKS: &str = r#"    <link rel="stylesheet" href="../../../../css/main.css">
    <link rel="stylesheet" href="styles.css">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Google+Sans:wght@400;500;700&family=Inter:wght@400;500;600&display=swap" rel="stylesheet">
    <link href="https://fonts.googleapis.com/icon?family=Material+Icons+Round" rel="stylesheet">"#;

// Reading offsetWidth flushes layout so re-adding `animate` restarts the
// animation instead of being coalesced with the removal.
const REPLAY_SCRIPT: &str = r#"        const playBtn = document.getElementById('playBtn');
        const demoElements = document.querySelectorAll('.demo-area > *');

        playBtn.addEventListener('click', () => {
            demoElements.forEach(elem => {
                elem.classList.remove('animate');
                elem.querySelectorAll('.animate').forEach(child => child.classList.remove('animate'));
                void elem.offsetWidth;
                elem.classList.add('animate');
                elem.querySelectorAll('[class*="switch-"], [class*="checkbox-"]').forEach(child => {
                    child.classList.add('animate');
                });
            });
        });

        window.addEventListener('load', () => {
            setTimeout(() => {
                demoElements.forEach(elem => {
                    elem.classList.add('animate');
                    elem.querySelectorAll('[class*="switch-"], [class*="checkbox-"]').forEach(child => {
                        child.classList.add('animate');
                    });
                });
            }, 300);
        });"#;

/// Render the preview document for one animation
pub fn render_html(animation_name: &str, category: &str, config: &DemoConfig) -> String {
    let title = escape_html(animation_name);
    let badge = escape_html(&category_display_name(category));
    let demo_html = &config.demo_html;
    let extra_js = &config.extra_js;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Animation Preview</title>
{STYLESHEET_LINKS}
</head>
<body>
    <div class="animation-preview-page">
        <header class="preview-header">
            <a href="../../index.html" class="back-link">
                <span class="material-icons-round">arrow_back</span>
                Back to Library
            </a>
            <div class="animation-info">
                <span class="category-badge">{badge}</span>
                <h1 class="animation-title">{title}</h1>
            </div>
        </header>

        <div class="preview-container">
            <div class="demo-area">
                {demo_html}
            </div>

            <div class="controls">
                <button class="play-btn" id="playBtn">
                    <span class="material-icons-round">play_arrow</span>
                    Play Animation
                </button>
            </div>
        </div>
    </div>

    <script>
{REPLAY_SCRIPT}
        {extra_js}
    </script>
</body>
</html>
"#
    )
}

const PAGE_CHROME_CSS: &str = r#".animation-preview-page {
    min-height: 100vh;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    padding: 2rem;
}

.preview-header {
    max-width: 1200px;
    margin: 0 auto 3rem;
}

.back-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    color: white;
    text-decoration: none;
    font-weight: 500;
    margin-bottom: 2rem;
    padding: 0.75rem 1.25rem;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
    border-radius: 12px;
    transition: all 0.2s;
}

.back-link:hover {
    background: rgba(255, 255, 255, 0.2);
    transform: translateX(-4px);
}

.animation-info {
    margin-top: 1.5rem;
}

.category-badge {
    display: inline-block;
    padding: 0.5rem 1rem;
    background: rgba(255, 255, 255, 0.2);
    color: white;
    border-radius: 8px;
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 1rem;
}

.animation-title {
    font-size: 2.5rem;
    font-weight: 700;
    color: white;
    margin: 0;
}

.preview-container {
    max-width: 1200px;
    margin: 0 auto;
    background: rgba(255, 255, 255, 0.95);
    border-radius: 24px;
    padding: 3rem;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.2);
}

.demo-area {
    min-height: 300px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #f5f5f5;
    border-radius: 16px;
    padding: 3rem;
    margin-bottom: 2rem;
}"#;

const CONTROLS_CSS: &str = r#"/* Controls */
.controls {
    text-align: center;
}

.play-btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    border-radius: 12px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    box-shadow: 0 4px 12px rgba(102, 126, 234, 0.4);
    transition: all 0.2s;
}

.play-btn:hover {
    transform: translateY(-2px);
    box-shadow: 0 6px 16px rgba(102, 126, 234, 0.5);
}

.play-btn:active {
    transform: translateY(0);
}

/* Responsive */
@media (max-width: 768px) {
    .animation-preview-page {
        padding: 1rem;
    }

    .animation-title {
        font-size: 1.75rem;
    }

    .preview-container {
        padding: 1.5rem;
    }

    .demo-area {
        padding: 2rem 1rem;
        min-height: 250px;
    }
}"#;

/// Render the stylesheet for one animation
///
/// Section order is significant: demo styles, then keyframes, then the
/// trigger class, so later rules win the cascade.
pub fn render_css(animation_name: &str, config: &DemoConfig) -> String {
    let heading = animation_name.replace("*/", "* /");
    let demo_styles = &config.demo_styles;
    let keyframes = &config.keyframes;
    let animation_class = &config.animation_class;

    format!(
        r#"/* {heading} Animation */

{PAGE_CHROME_CSS}

/* Custom Demo Styles */
{demo_styles}

/* Animation Keyframes */
{keyframes}

/* Animation Class */
{animation_class}

{CONTROLS_CSS}
"#
    )
}

/// Write `index.html` and `styles.css` for one animation
///
/// The directory is created if absent; existing files are overwritten.
/// Returns the page directory.
pub fn emit_page(
    library_dir: &Path,
    category: &str,
    animation_name: &str,
    config: &DemoConfig,
) -> Result<PathBuf> {
    let dir = page_dir(library_dir, category, animation_name)?;

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create page directory: {}", dir.display()))?;

    let html_path = dir.join(PAGE_FILE);
    fs::write(&html_path, render_html(animation_name, category, config))
        .with_context(|| format!("Failed to write page: {}", html_path.display()))?;

    let css_path = dir.join(STYLES_FILE);
    fs::write(&css_path, render_css(animation_name, config))
        .with_context(|| format!("Failed to write stylesheet: {}", css_path.display()))?;

    Ok(dir)
}

/// Find catalog entries that would write to the same directory
pub fn find_duplicate_slugs(catalog: &Catalog) -> Result<Vec<DuplicateSlug>> {
    let mut seen: HashMap<(String, String), &str> = HashMap::new();
    let mut duplicates = Vec::new();

    for (category, animation) in catalog.entries() {
        let key = (category.slug()?, animation.slug()?);
        if key.0.is_empty() || key.1.is_empty() {
            continue;
        }
        if let Some(first) = seen.insert(key.clone(), animation.name.as_str()) {
            duplicates.push(DuplicateSlug {
                category_slug: key.0,
                slug: key.1,
                first: first.to_string(),
                second: animation.name.clone(),
            });
        }
    }

    Ok(duplicates)
}

/// Generate preview pages for every catalog entry
///
/// `on_progress` is called after each page with `(generated, total, name)`,
/// where `total` counts only the entries that will be written (entries with
/// an empty slug are skipped up front). Filesystem errors abort the sweep;
/// pages written so far stay on disk.
pub fn generate_pages<F>(
    catalog: &Catalog,
    library_dir: &Path,
    policy: DuplicatePolicy,
    mut on_progress: F,
) -> Result<GenerationReport>
where
    F: FnMut(usize, usize, &str),
{
    let mut report = GenerationReport {
        duplicates: find_duplicate_slugs(catalog)?,
        ..GenerationReport::default()
    };

    if let Some(dup) = report.duplicates.first() {
        if policy == DuplicatePolicy::Error {
            return Err(GenerateError::DuplicateSlug {
                category: dup.category_slug.clone(),
                slug: dup.slug.clone(),
                name: dup.second.clone(),
            }
            .into());
        }
    }
    for dup in &report.duplicates {
        warn!(
            category = dup.category_slug.as_str(),
            slug = dup.slug.as_str(),
            first = dup.first.as_str(),
            second = dup.second.as_str(),
            "Duplicate animation slug, later entry overwrites earlier output"
        );
    }

    let mut pending = Vec::with_capacity(catalog.len());
    for (category, animation) in catalog.entries() {
        if category.slug()?.is_empty() || animation.slug()?.is_empty() {
            warn!(
                category = category.name.as_str(),
                name = animation.name.as_str(),
                "Skipping animation with an empty slug"
            );
            report.skipped.push(animation.name.clone());
        } else {
            pending.push((category, animation));
        }
    }
    report.total = pending.len();

    fs::create_dir_all(library_dir).with_context(|| {
        format!(
            "Failed to create library directory: {}",
            library_dir.display()
        )
    })?;

    info!(total = report.total, library = %library_dir.display(), "Generating animation previews");

    for (category, animation) in pending {
        let matches = matching_rules(&animation.name);
        if matches.len() > 1 {
            let ids: Vec<_> = matches.iter().map(|r| r.id).collect();
            debug!(
                name = animation.name.as_str(),
                rules = ?ids,
                "Name matches several demo rules, using the first"
            );
        }

        let resolution = resolve(&animation.name, &category.name)?;
        let dir = emit_page(library_dir, &category.name, &animation.name, &resolution.config)?;
        debug!(
            name = animation.name.as_str(),
            rule = resolution.rule_id(),
            dir = %dir.display(),
            "Wrote preview page"
        );

        report.pages.push(dir);
        report.generated += 1;
        on_progress(report.generated, report.total, &animation.name);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AnimationDescriptor, Category};
    use crate::generator::resolve_config;
    use tempfile::TempDir;

    fn catalog(entries: Vec<(&str, Vec<&str>)>) -> Catalog {
        Catalog {
            categories: entries
                .into_iter()
                .map(|(name, animations)| Category {
                    name: name.to_string(),
                    animations: animations
                        .into_iter()
                        .map(|a| AnimationDescriptor::new(a, &["all"]))
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_page_dir_nests_by_category() {
        let dir =
            page_dir(Path::new("lib"), "System_Navigation", "Navigation Push/Pop Slide").unwrap();
        assert_eq!(
            dir,
            Path::new("lib")
                .join("system-navigation")
                .join("navigation-push-pop-slide")
        );
    }

    #[test]
    fn test_render_html_structure() {
        let config = resolve_config("Button Press Squish", "Gestures").unwrap();
        let html = render_html("Button Press Squish", "Tactile_Gestures", &config);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Button Press Squish - Animation Preview</title>"));
        assert!(html.contains(r#"<span class="category-badge">Tactile Gestures</span>"#));
        assert!(html.contains(r#"<h1 class="animation-title">Button Press Squish</h1>"#));
        assert!(html.contains(r#"<div class="demo-area">"#));
        assert!(html.contains(r#"<button class="demo-press-button">"#));
        assert!(html.contains("Play Animation"));
        assert!(html.contains("void elem.offsetWidth;"));
        assert!(html.contains(r#"[class*="switch-"], [class*="checkbox-"]"#));
    }

    #[test]
    fn test_render_html_appends_extra_js_after_replay_handler() {
        let config = resolve_config("Switch Toggle", "Controls").unwrap();
        let html = render_html("Switch Toggle", "Controls", &config);

        let replay = html.find("const demoElements").unwrap();
        let extra = html.find("// Animate track too").unwrap();
        let end = html.find("</script>").unwrap();
        assert!(replay < extra && extra < end);
    }

    #[test]
    fn test_render_html_escapes_name_and_category() {
        let config = DemoConfig::default();
        let html = render_html("<b>Bold</b>", "A&B", &config);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains(r#"<span class="category-badge">A&amp;B</span>"#));
    }

    #[test]
    fn test_render_css_section_order() {
        let config = DemoConfig {
            demo_html: String::new(),
            keyframes: "@keyframes k {}".to_string(),
            animation_class: ".x.animate { animation: k 1s; }".to_string(),
            extra_js: String::new(),
            demo_styles: ".x { color: red; }".to_string(),
        };
        let css = render_css("Order Check", &config);

        assert!(css.starts_with("/* Order Check Animation */"));
        let chrome = css.find(".animation-preview-page {").unwrap();
        let styles = css.find(".x { color: red; }").unwrap();
        let keyframes = css.find("@keyframes k {}").unwrap();
        let class = css.find(".x.animate").unwrap();
        let controls = css.find("/* Controls */").unwrap();
        assert!(chrome < styles);
        assert!(styles < keyframes);
        assert!(keyframes < class);
        assert!(class < controls);
    }

    #[test]
    fn test_render_css_neutralizes_comment_terminator() {
        let css = render_css("Evil */ Name", &DemoConfig::default());
        assert!(css.starts_with("/* Evil * / Name Animation */"));
    }

    #[test]
    fn test_emit_page_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = resolve_config("Checkbox Tick", "Controls").unwrap();

        let dir = emit_page(temp_dir.path(), "Controls", "Checkbox Tick", &config).unwrap();
        assert_eq!(dir, temp_dir.path().join("controls").join("checkbox-tick"));

        let html = fs::read_to_string(dir.join(PAGE_FILE)).unwrap();
        let css = fs::read_to_string(dir.join(STYLES_FILE)).unwrap();
        assert!(html.contains("checkbox-check"));
        assert!(css.contains("@keyframes drawCheck"));
    }

    #[test]
    fn test_emit_page_overwrites_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("feedback").join("pulse");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PAGE_FILE), "stale").unwrap();

        let config = resolve_config("Pulse", "Feedback").unwrap();
        emit_page(temp_dir.path(), "Feedback", "Pulse", &config).unwrap();

        let html = fs::read_to_string(dir.join(PAGE_FILE)).unwrap();
        assert!(html.contains("pulse-icon"));
        assert!(!html.contains("stale"));
    }

    #[test]
    fn test_generate_pages_reports_progress() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = catalog(vec![
            ("Gestures", vec!["Button Press Squish", "Card Lift"]),
            ("Feedback", vec!["Pulse"]),
        ]);

        let mut progress = Vec::new();
        let report = generate_pages(&catalog, temp_dir.path(), DuplicatePolicy::Warn, |n, t, name| {
            progress.push(format!("{n}/{t} {name}"));
        })
        .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.generated, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(
            progress,
            vec![
                "1/3 Button Press Squish",
                "2/3 Card Lift",
                "3/3 Pulse"
            ]
        );
        assert!(temp_dir.path().join("feedback/pulse/index.html").exists());
        assert!(temp_dir.path().join("gestures/card-lift/styles.css").exists());
    }

    #[test]
    fn test_generate_pages_skips_empty_slugs() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = catalog(vec![("Gestures", vec!["!!!", "Pulse"]), ("???", vec!["Lift"])]);

        let mut progress = Vec::new();
        let report = generate_pages(&catalog, temp_dir.path(), DuplicatePolicy::Warn, |n, t, _| {
            progress.push(format!("{n}/{t}"));
        })
        .unwrap();

        assert_eq!(report.generated, 1);
        assert_eq!(report.total, 1);
        assert_eq!(progress, vec!["1/1"]);
        assert_eq!(report.skipped, vec!["!!!", "Lift"]);
        assert!(!temp_dir.path().join("gestures").join(PAGE_FILE).exists());
    }

    #[test]
    fn test_generate_pages_duplicate_warn_last_wins() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = catalog(vec![("Feedback", vec!["Pulse", "PULSE!"])]);

        let report =
            generate_pages(&catalog, temp_dir.path(), DuplicatePolicy::Warn, |_, _, _| {}).unwrap();

        assert_eq!(report.generated, 2);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].first, "Pulse");
        assert_eq!(report.duplicates[0].second, "PULSE!");

        let html = fs::read_to_string(temp_dir.path().join("feedback/pulse/index.html")).unwrap();
        assert!(html.contains("<title>PULSE! - Animation Preview</title>"));
    }

    #[test]
    fn test_generate_pages_duplicate_error_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let library = temp_dir.path().join("library");
        let catalog = catalog(vec![("Feedback", vec!["Pulse", "pulse"])]);

        let err = generate_pages(&catalog, &library, DuplicatePolicy::Error, |_, _, _| {})
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<GenerateError>(),
            Some(&GenerateError::DuplicateSlug {
                category: "feedback".to_string(),
                slug: "pulse".to_string(),
                name: "pulse".to_string(),
            })
        );
        assert!(!library.exists());
    }

    #[test]
    fn test_same_name_in_different_categories_is_not_duplicate() {
        let catalog = catalog(vec![("Feedback", vec!["Pulse"]), ("Icons", vec!["Pulse"])]);
        assert!(find_duplicate_slugs(&catalog).unwrap().is_empty());
    }

    #[test]
    fn test_generate_pages_fails_when_library_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let library = temp_dir.path().join("library");
        fs::write(&library, "not a directory").unwrap();

        let catalog = catalog(vec![("Feedback", vec!["Pulse"])]);
        let result = generate_pages(&catalog, &library, DuplicatePolicy::Warn, |_, _, _| {});
        assert!(result.is_err());
    }
}
