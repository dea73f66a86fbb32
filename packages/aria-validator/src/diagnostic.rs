//! Diagnostics
//!
//! A diagnostic names one unrecognized attribute. It is informational only:
//! emitting one never stops validation of the remaining attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an attribute name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Prefixed name that is not in the allow-list
    Unknown,
    /// Prefixed name whose lower-cased form is in the allow-list
    Misspelled,
    /// `ariaLabel`-style name; only reported when camelCase checks are enabled
    CamelCase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The attribute name exactly as supplied
    pub name: String,
    pub kind: DiagnosticKind,
    /// Recognized spelling, when one could be derived
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn unknown(name: impl Into<String>) -> Self {
        Diagnostic {
            name: name.into(),
            kind: DiagnosticKind::Unknown,
            suggestion: None,
        }
    }

    pub fn misspelled(name: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Diagnostic {
            name: name.into(),
            kind: DiagnosticKind::Misspelled,
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn camel_case(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Diagnostic {
            name: name.into(),
            kind: DiagnosticKind::CamelCase,
            suggestion,
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.suggestion) {
            (DiagnosticKind::Unknown, _) => write!(f, "Unknown attribute `{}`", self.name),
            (DiagnosticKind::Misspelled, Some(suggestion)) => write!(
                f,
                "Unknown attribute `{}`. Did you mean `{}`?",
                self.name, suggestion
            ),
            (DiagnosticKind::Misspelled, None) => write!(f, "Unknown attribute `{}`", self.name),
            (DiagnosticKind::CamelCase, Some(suggestion)) => write!(
                f,
                "Invalid attribute `{}`. Did you mean `{}`?",
                self.name, suggestion
            ),
            (DiagnosticKind::CamelCase, None) => write!(
                f,
                "Invalid attribute `{}`. Attribute names must be dash-case and lower-case",
                self.name
            ),
        }
    }
}
