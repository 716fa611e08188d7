use thiserror::Error;

/// Stable warning codes attached to non-fatal resolution diagnostics.
pub mod codes {
    pub const EXPORTS_KEY_IGNORED: &str = "EXPORTS_KEY_IGNORED";
    pub const EXPORTS_ROOT_SHADOWED: &str = "EXPORTS_ROOT_SHADOWED";
}

/// Core error type for descriptor resolution.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid package descriptor: {0}")]
    DescriptorParse(#[from] serde_json::Error),

    #[error("exports declaration at '{key}' nests deeper than {max_depth} levels")]
    MalformedExportsDeclaration { key: String, max_depth: usize },

    #[error("unsupported exports shape at '{key}': expected {expected}, found {found}")]
    UnsupportedExportsShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Create an unsupported-shape error.
    #[must_use]
    pub(crate) fn shape(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::UnsupportedExportsShape {
            key: key.into(),
            expected,
            found,
        }
    }
}
