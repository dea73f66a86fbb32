//! Attribute Validator
//!
//! Classifies the prefixed keys of an attribute map against an [`AllowList`]
//! and reports every key the list does not recognize.
//!
//! Validation only looks at keys. Values are opaque and never inspected, so
//! any `IndexMap<String, V>` can be validated. Keys outside the prefix family
//! are ignored; they belong to other validators.

use super::allow_list::AllowList;
use super::attribute_schema_registry::{AttributeSchemaRegistry, ValidationOutcome};
use crate::diagnostic::Diagnostic;
use crate::reporter::Reporter;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

/// Remainder of a camelCase name once the prefix stem is removed, e.g. `Label` in `ariaLabel`
static CAMEL_CASE_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][\w.:\-]*$").unwrap());

/// Ordered attribute map as read from JSON
pub type AttributeMap = IndexMap<String, serde_json::Value>;

/// Unrecognized attributes of one validation call, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn unknown_names(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// One-line summary for an element, or `None` when nothing was rejected
    pub fn summary(&self, tag_name: &str) -> Option<String> {
        let names = self
            .diagnostics
            .iter()
            .map(|d| format!("`{}`", d.name))
            .collect::<Vec<_>>();
        match names.len() {
            0 => None,
            1 => Some(format!(
                "Invalid attribute {} on <{}> tag",
                names[0], tag_name
            )),
            _ => Some(format!(
                "Invalid attributes {} on <{}> tag",
                names.join(", "),
                tag_name
            )),
        }
    }
}

impl IntoIterator for ValidationResult {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

/// Stateless validator over a shared, immutable [`AllowList`].
///
/// Cloning is cheap and clones may be used from several threads at once.
#[derive(Debug, Clone)]
pub struct AttributeValidator {
    allow_list: Arc<AllowList>,
    check_camel_case: bool,
}

impl AttributeValidator {
    pub fn new(allow_list: Arc<AllowList>) -> Self {
        AttributeValidator {
            allow_list,
            check_camel_case: false,
        }
    }

    /// Validator over the built-in ARIA table
    pub fn aria() -> Self {
        Self::new(AllowList::aria())
    }

    /// Also report `ariaLabel`-style names, which browsers ignore
    pub fn with_camel_case_check(mut self, enabled: bool) -> Self {
        self.check_camel_case = enabled;
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    pub fn checks_camel_case(&self) -> bool {
        self.check_camel_case
    }

    /// Whether `name` belongs to the prefix family, ignoring ASCII case
    pub fn matches_prefix(&self, name: &str) -> bool {
        let prefix = self.allow_list.prefix();
        name.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.allow_list.contains(name)
    }

    /// Diagnostic for a single name, or `None` when it is accepted or out of scope
    pub fn classify(&self, name: &str) -> Option<Diagnostic> {
        if self.matches_prefix(name) {
            if self.is_known(name) {
                return None;
            }
            let lower = name.to_lowercase();
            if lower != name && self.is_known(&lower) {
                return Some(Diagnostic::misspelled(name, lower));
            }
            return Some(Diagnostic::unknown(name));
        }

        if self.check_camel_case {
            if let Some(tail) = self.camel_case_tail(name) {
                let candidate = format!("{}{}", self.allow_list.prefix(), tail.to_lowercase());
                let suggestion = self.is_known(&candidate).then_some(candidate);
                return Some(Diagnostic::camel_case(name, suggestion));
            }
        }

        None
    }

    /// Classify a sequence of names without reporting
    pub fn check_names<'a, I>(&self, names: I) -> ValidationResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        ValidationResult {
            diagnostics: names
                .into_iter()
                .filter_map(|name| self.classify(name))
                .collect(),
        }
    }

    /// Classify the keys of `attributes` without reporting
    pub fn check<V>(&self, attributes: &IndexMap<String, V>) -> ValidationResult {
        self.check_names(attributes.keys().map(String::as_str))
    }

    /// Report one diagnostic per unrecognized prefixed key, in input order
    pub fn validate<V, R>(&self, attributes: &IndexMap<String, V>, reporter: &mut R)
    where
        R: Reporter + ?Sized,
    {
        for diagnostic in self.check(attributes).iter() {
            reporter.report(diagnostic);
        }
    }

    /// Like [`validate`](Self::validate), scoped to an element.
    ///
    /// Custom elements (a `-` in the tag name) are skipped: their
    /// attributes are not governed by the table.
    pub fn validate_element<V, R>(
        &self,
        tag_name: &str,
        attributes: &IndexMap<String, V>,
        reporter: &mut R,
    ) where
        R: Reporter + ?Sized,
    {
        if is_custom_element(tag_name) {
            tracing::trace!(tag = tag_name, "skipping custom element");
            return;
        }
        self.validate(attributes, reporter);
    }

    fn camel_case_tail<'a>(&self, name: &'a str) -> Option<&'a str> {
        let stem = self.allow_list.prefix().trim_end_matches('-');
        let tail = name.strip_prefix(stem)?;
        CAMEL_CASE_TAIL.is_match(tail).then_some(tail)
    }
}

impl Default for AttributeValidator {
    fn default() -> Self {
        Self::aria()
    }
}

impl AttributeSchemaRegistry for AttributeValidator {
    fn has_attribute(&self, name: &str) -> bool {
        self.classify(name).is_none()
    }

    fn validate_attribute(&self, name: &str) -> ValidationOutcome {
        match self.classify(name) {
            Some(diagnostic) => ValidationOutcome::error(diagnostic.message()),
            None => ValidationOutcome::ok(),
        }
    }

    fn all_known_attributes(&self) -> Vec<String> {
        self.allow_list.iter().map(str::to_string).collect()
    }
}

fn is_custom_element(tag_name: &str) -> bool {
    tag_name.contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;
    use crate::reporter::CollectingReporter;

    fn attrs(keys: &[&str]) -> IndexMap<String, &'static str> {
        keys.iter().map(|k| (k.to_string(), "value")).collect()
    }

    #[test]
    fn test_matches_prefix_ignores_case() {
        let validator = AttributeValidator::aria();
        assert!(validator.matches_prefix("aria-label"));
        assert!(validator.matches_prefix("ARIA-LABEL"));
        assert!(!validator.matches_prefix("aria"));
        assert!(!validator.matches_prefix("data-aria-label"));
    }

    #[test]
    fn test_classify_known_and_out_of_scope() {
        let validator = AttributeValidator::aria();
        assert_eq!(validator.classify("aria-label"), None);
        assert_eq!(validator.classify("role"), None);
        assert_eq!(validator.classify("ariaLabel"), None);
    }

    #[test]
    fn test_classify_misspelled() {
        let validator = AttributeValidator::aria();
        let diagnostic = validator.classify("aria-Label").unwrap();
        assert_eq!(diagnostic.kind, DiagnosticKind::Misspelled);
        assert_eq!(diagnostic.suggestion.as_deref(), Some("aria-label"));
    }

    #[test]
    fn test_classify_camel_case_when_enabled() {
        let validator = AttributeValidator::aria().with_camel_case_check(true);
        let known = validator.classify("ariaLabel").unwrap();
        assert_eq!(known.kind, DiagnosticKind::CamelCase);
        assert_eq!(known.suggestion.as_deref(), Some("aria-label"));

        let unknown = validator.classify("ariaBogus").unwrap();
        assert_eq!(unknown.suggestion, None);

        assert_eq!(validator.classify("ariadne"), None);
    }

    #[test]
    fn test_validate_element_skips_custom_elements() {
        let validator = AttributeValidator::aria();
        let mut reporter = CollectingReporter::new();
        validator.validate_element("my-widget", &attrs(&["aria-badprop"]), &mut reporter);
        assert!(reporter.is_empty());

        validator.validate_element("div", &attrs(&["aria-badprop"]), &mut reporter);
        assert_eq!(reporter.names(), vec!["aria-badprop"]);
    }

    #[test]
    fn test_validate_element_matches_validate_for_is_attribute() {
        let validator = AttributeValidator::aria();
        let attributes = attrs(&["is", "aria-badprop"]);

        let mut scoped = CollectingReporter::new();
        validator.validate_element("button", &attributes, &mut scoped);
        let mut plain = CollectingReporter::new();
        validator.validate(&attributes, &mut plain);

        assert_eq!(scoped.names(), vec!["aria-badprop"]);
        assert_eq!(scoped.names(), plain.names());
    }

    #[test]
    fn test_classify_bare_prefix_is_unknown() {
        let validator = AttributeValidator::aria();
        assert!(validator.matches_prefix("aria-"));
        assert_eq!(validator.classify("aria-"), Some(Diagnostic::unknown("aria-")));
    }

    #[test]
    fn test_summary() {
        let validator = AttributeValidator::aria();
        assert_eq!(validator.check(&attrs(&["aria-label"])).summary("div"), None);
        assert_eq!(
            validator
                .check(&attrs(&["aria-badprop"]))
                .summary("div")
                .as_deref(),
            Some("Invalid attribute `aria-badprop` on <div> tag")
        );
        assert_eq!(
            validator
                .check(&attrs(&["aria-a", "aria-b"]))
                .summary("span")
                .as_deref(),
            Some("Invalid attributes `aria-a`, `aria-b` on <span> tag")
        );
    }

    #[test]
    fn test_registry_interface() {
        let validator = AttributeValidator::aria();
        assert!(validator.has_attribute("aria-colindextext"));
        assert!(!validator.has_attribute("aria-badprop"));

        let outcome = validator.validate_attribute("aria-badprop");
        assert!(outcome.error);
        assert_eq!(outcome.msg.as_deref(), Some("Unknown attribute `aria-badprop`"));
        assert!(!validator.validate_attribute("href").error);

        let known = validator.all_known_attributes();
        assert!(known.contains(&"aria-braillelabel".to_string()));
    }
}
