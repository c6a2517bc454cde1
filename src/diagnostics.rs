//! Findings produced by the rule.
//!
//! A finding is an immutable (location, message-kind) record. The two
//! message strings are fixed; the rule has no configuration that could
//! change them. Findings accumulate per file in document order.

use crate::source_file::SourceFile;
use crate::span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two ways a member can be out of compliance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    /// An inherited member is redeclared without the `@override` marker.
    MissingOverride,
    /// The `@override` marker sits on a member that overrides nothing.
    UnnecessaryOverride,
}

impl FindingKind {
    /// The fixed failure message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            FindingKind::MissingOverride => {
                "Missing override decorator, properties and methods must be marked"
            }
            FindingKind::UnnecessaryOverride => {
                "Unnecessary override decorator, does not exist in heritage clause"
            }
        }
    }
}

/// One reported rule violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The file containing the finding
    pub file_name: String,
    /// The source span of the offending member declaration
    pub span: Span,
    /// Which failure this is
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(file_name: impl Into<String>, span: Span, kind: FindingKind) -> Finding {
        Finding {
            file_name: file_name.into(),
            span,
            kind,
        }
    }

    /// The failure message.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Format with file, 1-based line and column, and the rule name.
    ///
    /// Returns a string like:
    /// `example.ts(3,5): error declare-override: Missing override decorator, ...`
    pub fn format(&self, source_file: &SourceFile) -> String {
        let pos = source_file.offset_to_position(self.span.start);
        format!(
            "{}({},{}): error {}: {}",
            self.file_name,
            pos.line + 1,
            pos.character + 1,
            crate::RULE_NAME,
            self.message()
        )
    }

    /// Format without position information.
    pub fn format_simple(&self) -> String {
        format!("error {}: {}", crate::RULE_NAME, self.message())
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

/// An ordered accumulator of findings for one file.
#[derive(Clone, Debug, Default)]
pub struct FindingBag {
    findings: Vec<Finding>,
    default_file: String,
}

impl FindingBag {
    /// Create a new empty bag.
    pub fn new() -> FindingBag {
        FindingBag::default()
    }

    /// Create a bag with a default file name.
    pub fn with_file(file_name: impl Into<String>) -> FindingBag {
        FindingBag {
            findings: Vec::new(),
            default_file: file_name.into(),
        }
    }

    /// Get the default file name.
    pub fn default_file(&self) -> &str {
        &self.default_file
    }

    /// Add a finding.
    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Report a finding against the default file.
    pub fn report(&mut self, kind: FindingKind, span: Span) {
        self.add(Finding::new(&self.default_file, span, kind));
    }

    /// Get the number of findings.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Get all findings as a slice.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Iterate over findings.
    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    /// Sort findings by file, then by position.
    pub fn sort(&mut self) {
        self.findings
            .sort_by(|a, b| match a.file_name.cmp(&b.file_name) {
                std::cmp::Ordering::Equal => a.span.start.cmp(&b.span.start),
                other => other,
            });
    }

    /// Take all findings, leaving the bag empty.
    pub fn take(&mut self) -> Vec<Finding> {
        std::mem::take(&mut self.findings)
    }

    /// Clear all findings.
    pub fn clear(&mut self) {
        self.findings.clear();
    }
}

impl IntoIterator for FindingBag {
    type Item = Finding;
    type IntoIter = std::vec::IntoIter<Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.into_iter()
    }
}

impl<'a> IntoIterator for &'a FindingBag {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}

impl Extend<Finding> for FindingBag {
    fn extend<T: IntoIterator<Item = Finding>>(&mut self, iter: T) {
        for finding in iter {
            self.add(finding);
        }
    }
}
