//! Accumulating diagnostics for a header partition read.
//!
//! Non-fatal findings (unknown local tags, unregistered set keys) are
//! collected here with a severity rather than aborting the parse, so a
//! single pass can report multiple defects per file. The constructor
//! snapshots the fatal count on entry and fails if it grew.

use std::fmt;

/// Severity of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Tolerated irregularity, parsing continued.
    Warn,
    /// Defect in the input, parsing continued.
    Error,
    /// Defect that invalidates the partition.
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Classification of a recorded diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Byte source failure.
    IoFailure,
    /// Bad KLV framing.
    MalformedKlv,
    /// Header partition not at offset 0.
    UnexpectedOffset,
    /// Partition pack is not a valid header partition.
    InvalidPartitionPack,
    /// Primer pack missing where required.
    MissingPrimer,
    /// Bad primer batch or duplicate local tag.
    MalformedPrimer,
    /// Local tag absent from the primer, field skipped.
    UnknownLocalTag,
    /// Unregistered structural set key, value skipped.
    UnknownStructuralSet,
    /// Field value failed to decode.
    FieldDecodeFailure,
    /// More than one Preface set in the partition.
    MultiplePreface,
    /// No Preface set in the partition.
    NoPreface,
    /// Descriptor violated a structural constraint.
    InvalidDescriptor,
    /// Strong-reference graph has a cycle.
    CyclicGraph,
    /// Strong reference did not resolve within the partition.
    UnresolvedStrongRef,
}

/// A single recorded diagnostic.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity of the finding.
    pub severity: Severity,
    /// Classification of the finding.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub description: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}: {}", self.severity, self.kind, self.description)
    }
}

/// Ordered collection of diagnostics for one header partition read.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    entries: Vec<LogEntry>,
}

impl ErrorLog {
    /// Create an empty log.
    pub fn new() -> Self {
        ErrorLog::default()
    }

    /// Record a WARN-level diagnostic.
    pub fn warn(&mut self, kind: ErrorKind, description: impl Into<String>) {
        self.add(Severity::Warn, kind, description);
    }

    /// Record an ERROR-level diagnostic.
    pub fn error(&mut self, kind: ErrorKind, description: impl Into<String>) {
        self.add(Severity::Error, kind, description);
    }

    /// Record a FATAL-level diagnostic.
    pub fn fatal(&mut self, kind: ErrorKind, description: impl Into<String>) {
        self.add(Severity::Fatal, kind, description);
    }

    fn add(&mut self, severity: Severity, kind: ErrorKind, description: impl Into<String>) {
        self.entries.push(LogEntry {
            severity,
            kind,
            description: description.into(),
        });
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of FATAL diagnostics.
    pub fn fatal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.severity == Severity::Fatal)
            .count()
    }

    /// All recorded diagnostics, in recording order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}
