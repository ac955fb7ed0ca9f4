use derive_more::Display;
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ViolationKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum ViolationKind {
    #[display("required")]
    Required,
    #[display("too_long")]
    TooLong,
    #[display("duplicate")]
    Duplicate,
}

///
/// Violation
///
/// One structured violation attached to a named field, as opposed to a
/// whole-record error.
///

#[derive(Clone, Debug, Serialize)]
pub struct Violation {
    kind: ViolationKind,
    message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

///
/// ReportSink
///
/// Narrow interface exposed to validators for recording violations.
/// Validators only write; they never read a sink back.
///

pub trait ReportSink {
    fn add_violation(&mut self, field: &'static str, violation: Violation);
}

///
/// Report
///
/// Caller-owned accumulator of field-keyed violations, scoped to one
/// validation call.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    violations: BTreeMap<&'static str, Vec<Violation>>,
}

impl Report {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: BTreeMap::new(),
        }
    }

    /// True when any field accumulated a violation.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// True when the named field accumulated a violation.
    #[must_use]
    pub fn has_field_violations(&self, field: &str) -> bool {
        self.violations.contains_key(field)
    }

    #[must_use]
    pub fn field_violations(&self, field: &str) -> &[Violation] {
        self.violations.get(field).map_or(&[], Vec::as_slice)
    }

    /// Total violation count across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Violation)> {
        self.violations
            .iter()
            .flat_map(|(field, violations)| violations.iter().map(move |v| (*field, v)))
    }
}

impl ReportSink for Report {
    fn add_violation(&mut self, field: &'static str, violation: Violation) {
        self.violations.entry(field).or_default().push(violation);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violation(s) across {} field(s)",
            self.len(),
            self.violations.len()
        )
    }
}

///
/// FieldContext
///
/// Short-lived adapter binding one field name to a sink, so individual
/// rules report without knowing which field they are checking.
///

pub struct FieldContext<'a> {
    field: &'static str,
    sink: &'a mut dyn ReportSink,
}

impl<'a> FieldContext<'a> {
    pub fn new(field: &'static str, sink: &'a mut dyn ReportSink) -> Self {
        Self { field, sink }
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    pub fn issue(&mut self, kind: ViolationKind, message: impl Into<String>) {
        self.sink
            .add_violation(self.field, Violation::new(kind, message));
    }
}
