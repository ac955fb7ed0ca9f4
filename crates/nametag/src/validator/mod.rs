pub mod len;
pub mod text;

use crate::{
    TAG_MAX_LEN, VOID_REASON_MAX_LEN,
    error::Error,
    record::NameTag,
    report::{FieldContext, Report, ViolationKind},
    traits::{TagLookup, Validator},
};

/// Field names as they appear in violation reports.
pub mod field {
    pub const TAG: &str = "tag";
    pub const VOID_REASON: &str = "void_reason";
}

///
/// NameTagValidator
///
/// Record-level validator for name tags. Holds its duplicate-lookup
/// collaborator explicitly; stateless between calls and idempotent, so it
/// is safe to share across threads when the lookup is.
///

pub struct NameTagValidator<L> {
    lookup: L,
}

impl<L: TagLookup> NameTagValidator<L> {
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Run every applicable rule against the record, accumulating
    /// violations into `report`.
    ///
    /// An absent record is a caller contract breach and fails with
    /// [`Error::Precondition`] before the report is touched. Expected
    /// validation outcomes are never returned as errors; they land in the
    /// report so one pass surfaces every violation. Lookup failures
    /// propagate unchanged.
    pub fn validate(&self, record: Option<&NameTag>, report: &mut Report) -> Result<(), Error> {
        let Some(record) = record else {
            return Err(Error::precondition("cannot validate an absent name tag"));
        };

        self.check_tag(record, report)?;
        Self::check_void_reason(record, report);

        Ok(())
    }

    fn check_tag(&self, record: &NameTag, report: &mut Report) -> Result<(), Error> {
        let tag = record.tag();

        let mut ctx = FieldContext::new(field::TAG, report);
        text::NotBlank.validate(tag, &mut ctx);
        len::Max::new(TAG_MAX_LEN).validate(tag, &mut ctx);

        // A blank tag has no meaningful key to probe for duplicates; the
        // required rule already fired.
        if tag.trim().is_empty() {
            return Ok(());
        }

        if let Some(existing) = self.lookup.find_by_tag(tag)?
            && existing.id() != record.id()
        {
            let mut ctx = FieldContext::new(field::TAG, report);
            ctx.issue(
                ViolationKind::Duplicate,
                format!("tag '{tag}' is already in use"),
            );
        }

        Ok(())
    }

    fn check_void_reason(record: &NameTag, report: &mut Report) {
        if let Some(reason) = record.void_reason() {
            let mut ctx = FieldContext::new(field::VOID_REASON, report);
            len::Max::new(VOID_REASON_MAX_LEN).validate(reason, &mut ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NameTagValidator, field};
    use crate::{
        error::Error,
        record::NameTag,
        registry::TagRegistry,
        report::{Report, ViolationKind},
        traits::TagLookup,
    };

    fn kinds(report: &Report, field: &str) -> Vec<ViolationKind> {
        report
            .field_violations(field)
            .iter()
            .map(|v| v.kind())
            .collect()
    }

    fn run(registry: &TagRegistry, record: &NameTag) -> Report {
        let mut report = Report::new();
        NameTagValidator::new(registry)
            .validate(Some(record), &mut report)
            .expect("validation pass should not fail");

        report
    }

    #[test]
    fn absent_record_is_a_precondition_failure_and_leaves_the_report_untouched() {
        let registry = TagRegistry::new();
        let mut report = Report::new();

        let err = NameTagValidator::new(&registry)
            .validate(None, &mut report)
            .expect_err("absent record should be refused");

        assert!(matches!(err, Error::Precondition { .. }));
        assert!(report.is_empty());
    }

    #[test]
    fn blank_tags_are_required_violations() {
        let registry = TagRegistry::new();

        for raw in ["", " ", " \t\n"] {
            let record = NameTag::new(raw);
            let report = run(&registry, &record);

            assert!(
                report.has_field_violations(field::TAG),
                "tag {raw:?} should be reported"
            );
            assert_eq!(kinds(&report, field::TAG), vec![ViolationKind::Required]);
        }
    }

    #[test]
    fn well_formed_record_passes() {
        let registry = TagRegistry::new();
        let record = NameTag::new("tag");

        let report = run(&registry, &record);
        assert!(!report.has_violations());
    }

    #[test]
    fn tag_and_void_reason_within_limits_pass() {
        let registry = TagRegistry::new();
        let record = NameTag::new("tag").with_void_reason("VoidReason");

        let report = run(&registry, &record);
        assert!(!report.has_violations());
    }

    #[test]
    fn boundary_lengths_pass() {
        let registry = TagRegistry::new();
        let record = NameTag::new("x".repeat(50)).with_void_reason("y".repeat(255));

        let report = run(&registry, &record);
        assert!(!report.has_violations());
    }

    #[test]
    fn oversized_tag_and_void_reason_are_independent_violations() {
        let registry = TagRegistry::new();
        let record = NameTag::new("x".repeat(300)).with_void_reason("y".repeat(300));

        let report = run(&registry, &record);

        assert_eq!(kinds(&report, field::TAG), vec![ViolationKind::TooLong]);
        assert_eq!(
            kinds(&report, field::VOID_REASON),
            vec![ViolationKind::TooLong]
        );
    }

    #[test]
    fn oversized_void_reason_alone_leaves_the_tag_clean() {
        let registry = TagRegistry::new();
        let record = NameTag::new("tag").with_void_reason("y".repeat(300));

        let report = run(&registry, &record);

        assert!(!report.has_field_violations(field::TAG));
        assert_eq!(
            kinds(&report, field::VOID_REASON),
            vec![ViolationKind::TooLong]
        );
    }

    #[test]
    fn colliding_tag_on_a_different_record_is_a_duplicate() {
        let mut registry = TagRegistry::new();
        registry
            .save(NameTag::new("preferred"))
            .expect("seed row should store");

        let record = NameTag::new("preferred");
        let report = run(&registry, &record);

        assert!(report.has_violations());
        assert_eq!(kinds(&report, field::TAG), vec![ViolationKind::Duplicate]);
    }

    #[test]
    fn revalidating_a_stored_record_is_clean() {
        let mut registry = TagRegistry::new();
        let stored = registry
            .save(NameTag::new("preferred"))
            .expect("seed row should store");

        let report = run(&registry, &stored);

        assert!(!report.has_violations());
        assert!(!report.has_field_violations(field::TAG));
    }

    #[test]
    fn validation_is_idempotent() {
        let registry = TagRegistry::new();
        let record = NameTag::new(" ");

        let first = run(&registry, &record);
        let second = run(&registry, &record);

        assert_eq!(kinds(&first, field::TAG), kinds(&second, field::TAG));
    }

    #[test]
    fn lookup_failures_propagate_unchanged() {
        struct FailingLookup;

        impl TagLookup for FailingLookup {
            fn find_by_tag(&self, _tag: &str) -> Result<Option<NameTag>, Error> {
                Err(Error::Lookup {
                    message: "backend offline".to_string(),
                })
            }
        }

        let record = NameTag::new("preferred");
        let mut report = Report::new();

        let err = NameTagValidator::new(FailingLookup)
            .validate(Some(&record), &mut report)
            .expect_err("lookup failure should surface");

        assert!(matches!(err, Error::Lookup { .. }));
    }

    #[test]
    fn blank_tags_skip_the_duplicate_probe() {
        struct PanickingLookup;

        impl TagLookup for PanickingLookup {
            fn find_by_tag(&self, _tag: &str) -> Result<Option<NameTag>, Error> {
                panic!("blank tags must not be probed");
            }
        }

        let record = NameTag::new("   ");
        let mut report = Report::new();

        NameTagValidator::new(PanickingLookup)
            .validate(Some(&record), &mut report)
            .expect("validation pass should not fail");

        assert_eq!(kinds(&report, field::TAG), vec![ViolationKind::Required]);
    }
}
