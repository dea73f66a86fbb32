#![deny(clippy::all)]

//! ARIA attribute validation
//!
//! Checks `aria-*` attribute names against a static allow-list and reports
//! each unrecognized name through an injected [`Reporter`].
//!
//! ```
//! use aria_validator::{AttributeValidator, CollectingReporter};
//! use indexmap::IndexMap;
//!
//! let validator = AttributeValidator::aria();
//! let mut attributes = IndexMap::new();
//! attributes.insert("aria-braillelabel".to_string(), "Braille label text");
//! attributes.insert("aria-badprop".to_string(), "maybe");
//!
//! let mut reporter = CollectingReporter::new();
//! validator.validate(&attributes, &mut reporter);
//! assert_eq!(reporter.names(), vec!["aria-badprop"]);
//! ```

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod reporter;
pub mod schema;

// Re-exports
pub use config::ValidatorConfig;
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{AllowListError, ConfigError};
pub use reporter::{CollectingReporter, Reporter, TracingReporter};
pub use schema::{
    AllowList, AttributeMap, AttributeSchemaRegistry, AttributeValidator, ValidationOutcome,
    ValidationResult, ARIA_PREFIX,
};
