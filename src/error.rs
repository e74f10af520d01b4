use thiserror::Error;

/// Failures a caller may want to distinguish from ordinary I/O errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Duplicate animation slug '{slug}' in category '{category}' (from \"{name}\")")]
    DuplicateSlug {
        category: String,
        slug: String,
        name: String,
    },
}
