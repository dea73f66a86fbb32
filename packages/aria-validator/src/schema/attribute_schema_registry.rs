//! Attribute Schema Registry
//!
//! Lookup interface shared by attribute validators.

/// Outcome of validating a single attribute name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub error: bool,
    pub msg: Option<String>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        ValidationOutcome {
            error: false,
            msg: None,
        }
    }

    pub fn error(msg: String) -> Self {
        ValidationOutcome {
            error: true,
            msg: Some(msg),
        }
    }
}

pub trait AttributeSchemaRegistry {
    /// Check if an attribute name is accepted.
    ///
    /// Names outside the registry's prefix family are accepted; they belong
    /// to other validators.
    fn has_attribute(&self, name: &str) -> bool;

    /// Validate attribute name
    fn validate_attribute(&self, name: &str) -> ValidationOutcome;

    /// Get all known attribute names
    fn all_known_attributes(&self) -> Vec<String>;
}
