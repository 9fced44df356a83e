//! # Element Tree Errors

use thiserror::Error;

/// Result type for element tree operations
pub type OxmlResult<T> = Result<T, OxmlError>;

/// Errors raised while reading typed values out of an element tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OxmlError {
    /// Attribute value does not parse as its declared simple type
    #[error("Invalid value for attribute {attr}: '{value}'")]
    InvalidValue { attr: String, value: String },

    /// A required attribute is absent
    #[error("Missing required attribute: {0}")]
    MissingAttribute(String),

    /// Element has a different tag than the caller expected
    #[error("Expected element {expected}, found {found}")]
    UnexpectedElement { expected: String, found: String },

    /// Tree shape violates a structural rule (ordering, uniqueness)
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

impl OxmlError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            OxmlError::InvalidValue { .. } => "OXML_INVALID_VALUE",
            OxmlError::MissingAttribute(_) => "OXML_MISSING_ATTRIBUTE",
            OxmlError::UnexpectedElement { .. } => "OXML_UNEXPECTED_ELEMENT",
            OxmlError::InvalidStructure(_) => "OXML_INVALID_STRUCTURE",
        }
    }

    pub(crate) fn invalid_value(attr: &str, value: &str) -> Self {
        OxmlError::InvalidValue {
            attr: attr.to_string(),
            value: value.to_string(),
        }
    }
}
