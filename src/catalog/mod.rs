//! # Catalog Module
//!
//! The animation catalog (`ui_animations.json`) is the declarative source of
//! truth for everything the generator emits: a mapping from category name to
//! an ordered list of animation descriptors.
//!
//! ## Format
//!
//! ```json
//! {
//!   "Gestures": [
//!     { "name": "Button Press Squish", "targets": ["button"] },
//!     "Swipe To Dismiss"
//!   ]
//! }
//! ```
//!
//! Bare strings are accepted as names and receive the `["all"]` target list.
//! A single wrapper object around the categories is unwrapped.

pub mod loader;
pub mod slug;

pub use loader::{
    load_catalog, load_catalog_or_empty, AnimationDescriptor, Catalog, Category, TargetLookup,
    DEFAULT_TARGET,
};
pub use slug::{category_display_name, slug_display_name, to_slug};
