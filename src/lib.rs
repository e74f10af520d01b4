//! glassgen - Static demo pages for a liquid-glass UI animation catalog
//!
//! This library reads the animation catalog, classifies every animation into a
//! demo template, writes one self-contained preview page per animation and
//! indexes the results into the `manifest.js` consumed by the showcase.

pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
