//! Schema Module
//!
//! Allow-lists, the ARIA property table, and the attribute validator

pub mod allow_list;
pub mod aria_properties;
pub mod attribute_schema_registry;
pub mod attribute_validator;

pub use allow_list::*;
pub use aria_properties::*;
pub use attribute_schema_registry::*;
pub use attribute_validator::*;
