use anyhow::{Context, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Matches every run of characters that may not appear in a slug
static NON_SLUG_RUN: OnceLock<Regex> = OnceLock::new();

fn non_slug_run() -> Result<&'static Regex> {
    if let Some(re) = NON_SLUG_RUN.get() {
        return Ok(re);
    }
    let re = Regex::new(r"[^a-z0-9]+").context("Failed to compile slug regex pattern")?;
    Ok(NON_SLUG_RUN.get_or_init(|| re))
}

/// Converts a display name into a filesystem and URL safe identifier
///
/// - Lower-cases the name
/// - Collapses every run of characters outside `[a-z0-9]` into a single `-`
/// - Trims leading and trailing hyphens
///
/// Examples:
///   - "Button Press Squish" -> "button-press-squish"
///   - "Navigation Push/Pop Slide" -> "navigation-push-pop-slide"
///   - "iOS_Modern_UI" -> "ios-modern-ui"
///   - "!!!" -> ""
pub fn to_slug(name: &str) -> Result<String> {
    let lowered = name.to_lowercase();
    Ok(non_slug_run()?
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string())
}

/// Formats a slug or underscored identifier for display
///
/// Hyphens become spaces, as used for manifest display names.
/// Examples:
///   - "button-press-squish" -> "button press squish"
pub fn slug_display_name(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Formats a category key for display: underscores become spaces
///
/// Examples:
///   - "System_Navigation" -> "System Navigation"
pub fn category_display_name(category: &str) -> String {
    category.replace('_', " ")
}
