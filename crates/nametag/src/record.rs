use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

///
/// TagId
///
/// Opaque identity key for a name-tag record. Minted once at construction
/// and only ever compared; the duplicate rule uses it to tell "same record"
/// from "different record with a colliding tag value".
///

#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
pub struct TagId(Ulid);

impl TagId {
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

///
/// NameTag
///
/// A short label attached to concept names in the record dictionary.
/// Constructed transient; the registry stores it only after the rule set
/// passes. Voiding keeps the row but marks it retired with a reason.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NameTag {
    id: TagId,
    tag: String,
    void_reason: Option<String>,
    voided: bool,
    created_at: DateTime<Utc>,
    voided_at: Option<DateTime<Utc>>,
}

impl NameTag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            tag: tag.into(),
            void_reason: None,
            voided: false,
            created_at: Utc::now(),
            voided_at: None,
        }
    }

    #[must_use]
    pub fn with_void_reason(mut self, reason: impl Into<String>) -> Self {
        self.void_reason = Some(reason.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> TagId {
        self.id
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn void_reason(&self) -> Option<&str> {
        self.void_reason.as_deref()
    }

    #[must_use]
    pub const fn is_voided(&self) -> bool {
        self.voided
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn voided_at(&self) -> Option<DateTime<Utc>> {
        self.voided_at
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn set_void_reason(&mut self, reason: Option<String>) {
        self.void_reason = reason;
    }

    pub(crate) fn mark_voided(&mut self, reason: impl Into<String>, at: DateTime<Utc>) {
        self.voided = true;
        self.void_reason = Some(reason.into());
        self.voided_at = Some(at);
    }

    pub(crate) fn tag_mut(&mut self) -> &mut String {
        &mut self.tag
    }

    pub(crate) fn void_reason_mut(&mut self) -> Option<&mut String> {
        self.void_reason.as_mut()
    }
}
