use crate::{error::Error, record::NameTag, report::FieldContext};

///
/// Validator
///
/// One rule over one value. Rules record violations through the context
/// and never fail the pass themselves.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T, ctx: &mut FieldContext<'_>);
}

///
/// TagLookup
///
/// Duplicate-probe collaborator: resolves a tag value to its persisted
/// record, if any. Exact match on the tag text. Handed to the record
/// validator explicitly; never resolved from ambient state.
///

pub trait TagLookup {
    fn find_by_tag(&self, tag: &str) -> Result<Option<NameTag>, Error>;
}

impl<T: TagLookup + ?Sized> TagLookup for &T {
    fn find_by_tag(&self, tag: &str) -> Result<Option<NameTag>, Error> {
        (**self).find_by_tag(tag)
    }
}
