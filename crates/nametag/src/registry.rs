use crate::{
    error::Error,
    record::{NameTag, TagId},
    report::Report,
    sanitize,
    traits::TagLookup,
    validator::NameTagValidator,
};
use chrono::Utc;
use std::collections::BTreeMap;
use tracing::{debug, warn};

///
/// TagRegistry
///
/// In-memory lookup table for name tags. Owns the persistence boundary:
/// records are sanitized and validated on the way in, so every stored row
/// already passed the rule set and tag uniqueness holds across ids.
///

#[derive(Debug, Default)]
pub struct TagRegistry {
    rows: BTreeMap<TagId, NameTag>,
}

impl TagRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Sanitize, validate, and store a record.
    ///
    /// Returns the stored row on success. A record with violations is
    /// refused with [`Error::Rejected`] carrying the full report, and the
    /// registry is left unchanged.
    pub fn save(&mut self, mut record: NameTag) -> Result<NameTag, Error> {
        sanitize::sanitize_record(&mut record);

        let mut report = Report::new();
        NameTagValidator::new(&*self).validate(Some(&record), &mut report)?;

        if report.has_violations() {
            warn!(id = %record.id(), %report, "name tag rejected");
            return Err(Error::Rejected(report));
        }

        debug!(id = %record.id(), tag = record.tag(), "name tag stored");
        self.rows.insert(record.id(), record.clone());

        Ok(record)
    }

    /// Void a stored record, recording the reason.
    ///
    /// The reason passes through the same sanitize/validate pipeline as any
    /// other save; an oversized reason is refused and the row keeps its
    /// previous state.
    pub fn void(&mut self, id: TagId, reason: impl Into<String>) -> Result<NameTag, Error> {
        let Some(mut record) = self.rows.get(&id).cloned() else {
            return Err(Error::NotFound { id });
        };

        record.mark_voided(reason, Utc::now());
        self.save(record)
    }

    pub fn remove(&mut self, id: TagId) -> Result<NameTag, Error> {
        self.rows.remove(&id).ok_or(Error::NotFound { id })
    }

    #[must_use]
    pub fn get(&self, id: TagId) -> Option<&NameTag> {
        self.rows.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NameTag> {
        self.rows.values()
    }
}

impl TagLookup for TagRegistry {
    fn find_by_tag(&self, tag: &str) -> Result<Option<NameTag>, Error> {
        Ok(self.rows.values().find(|row| row.tag() == tag).cloned())
    }
}
