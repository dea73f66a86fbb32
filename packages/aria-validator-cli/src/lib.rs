//! ARIA lint driver
//!
//! Loads attribute maps from JSON files and validates them. A file holds
//! either a single attribute map or an array whose entries are attribute
//! maps or `{ "tag": "div", "attributes": { ... } }` objects.

use anyhow::{Context, Result};
use aria_validator::{AttributeMap, AttributeValidator, CollectingReporter, Diagnostic, Reporter};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// `{ "tag": ..., "attributes": ... }` with no other keys; anything else is a bare map
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementEntry {
    #[serde(default)]
    tag: Option<String>,
    attributes: AttributeMap,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Entry {
    Element(ElementEntry),
    Bare(AttributeMap),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<Entry>),
    One(Entry),
}

/// One attribute map read from an input file
#[derive(Debug, Clone, PartialEq)]
pub struct LintInput {
    /// Position in the file's array, `None` for single-map files
    pub index: Option<usize>,
    pub tag: Option<String>,
    pub attributes: AttributeMap,
}

impl From<(Option<usize>, Entry)> for LintInput {
    fn from((index, entry): (Option<usize>, Entry)) -> Self {
        match entry {
            Entry::Element(ElementEntry { tag, attributes }) => LintInput {
                index,
                tag,
                attributes,
            },
            Entry::Bare(attributes) => LintInput {
                index,
                tag: None,
                attributes,
            },
        }
    }
}

/// Diagnostics for one input entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryReport {
    pub file: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EntryReport {
    /// `file#index <tag>` label used as the prefix of every output line
    pub fn location(&self) -> String {
        let mut location = self.file.display().to_string();
        if let Some(index) = self.index {
            location.push_str(&format!("#{}", index));
        }
        if let Some(tag) = &self.tag {
            location.push_str(&format!(" <{}>", tag));
        }
        location
    }

    /// Human-readable lines, one per diagnostic
    pub fn lines(&self) -> Vec<String> {
        let location = self.location();
        self.diagnostics
            .iter()
            .map(|d| format!("{}: {}", location, d))
            .collect()
    }

    /// Replay this entry's diagnostics into `reporter`
    pub fn replay<R: Reporter + ?Sized>(&self, reporter: &mut R) {
        for diagnostic in &self.diagnostics {
            reporter.report(diagnostic);
        }
    }
}

/// Parse the contents of one input file
pub fn parse_document(text: &str) -> Result<Vec<LintInput>> {
    let document: Document = serde_json::from_str(text)
        .context("expected an attribute map or an array of attribute maps")?;
    Ok(match document {
        Document::One(entry) => vec![LintInput::from((None, entry))],
        Document::Many(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LintInput::from((Some(i), entry)))
            .collect(),
    })
}

/// Validate a single input entry
pub fn lint_input(validator: &AttributeValidator, file: &Path, input: &LintInput) -> EntryReport {
    let diagnostics = match input.tag.as_deref() {
        Some(tag) => {
            let mut reporter = CollectingReporter::new();
            validator.validate_element(tag, &input.attributes, &mut reporter);
            reporter.into_diagnostics()
        }
        None => validator.check(&input.attributes).diagnostics,
    };

    EntryReport {
        file: file.to_path_buf(),
        index: input.index,
        tag: input.tag.clone(),
        diagnostics,
    }
}

/// Read and validate one file
pub fn lint_file(validator: &AttributeValidator, path: &Path) -> Result<Vec<EntryReport>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let inputs =
        parse_document(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = inputs.len(), "linting file");

    Ok(inputs
        .iter()
        .map(|input| lint_input(validator, path, input))
        .collect())
}

/// Validate every file in parallel; reports keep the order of `paths`
pub fn lint_files(validator: &AttributeValidator, paths: &[PathBuf]) -> Result<Vec<EntryReport>> {
    let per_file = paths
        .par_iter()
        .map(|path| lint_file(validator, path))
        .collect::<Result<Vec<_>>>()?;
    Ok(per_file.into_iter().flatten().collect())
}

/// Total diagnostics across reports
pub fn diagnostic_count(reports: &[EntryReport]) -> usize {
    reports.iter().map(|r| r.diagnostics.len()).sum()
}
