//! Error types for cross-section operations.

use thiserror::Error;

/// Result type for cross-section operations.
pub type SectionResult<T> = Result<T, SectionError>;

/// Errors that can occur while building or querying cross-sections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// A point with this identifier already exists on the section.
    #[error("duplicate point id {id:?} on section {section:?}")]
    DuplicatePoint {
        /// The conflicting point identifier.
        id: String,
        /// Name of the section.
        section: String,
    },

    /// The requested variable is not defined on the section.
    #[error("variable {name:?} not defined on section {section:?}")]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Name of the section.
        section: String,
    },

    /// The unit tag is not one of the supported tags.
    #[error("unknown unit tag {0:?} (supported: \"[mm]\", \"[m]\")")]
    UnknownUnit(String),

    /// The unit pair is outside the supported conversions.
    #[error("unsupported unit conversion from {from:?} to {to:?}")]
    UnsupportedConversion {
        /// Source unit tag.
        from: String,
        /// Target unit tag.
        to: String,
    },
}
