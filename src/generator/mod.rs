//! # Generator Module
//!
//! Turns the animation catalog into static preview pages.
//!
//! ## Pipeline
//!
//! | Stage | Function |
//! |-------|----------|
//! | Classify | [`resolver::resolve`] picks a demo template by name |
//! | Render | [`emitter::render_html`] / [`emitter::render_css`] build the documents |
//! | Write | [`emitter::emit_page`] materializes `index.html` and `styles.css` |
//! | Sweep | [`emitter::generate_pages`] runs the above over the whole catalog |
//!
//! Every run is a full rebuild. Output files are overwritten unconditionally
//! and directories left over from earlier runs are never removed.

pub mod emitter;
pub mod resolver;
pub mod templates;

pub use emitter::{
    emit_page, find_duplicate_slugs, generate_pages, page_dir, render_css, render_html,
    DuplicatePolicy, DuplicateSlug, GenerationReport, PAGE_FILE, STYLES_FILE,
};
pub use resolver::{
    matching_rules, resolve, resolve_config, Matcher, Resolution, Rule, FALLBACK_ID, RULES,
};

/// The resolved HTML/CSS/JS bundle used to render one animation's preview
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    /// Markup placed inside the demo area
    pub demo_html: String,
    /// `@keyframes` blocks
    pub keyframes: String,
    /// Rules attaching the keyframes to elements carrying `.animate`
    pub animation_class: String,
    /// Script appended verbatim after the standard replay handler
    pub extra_js: String,
    /// Layout styles for the demo markup
    pub demo_styles: String,
}
