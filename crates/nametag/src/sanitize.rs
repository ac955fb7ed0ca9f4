use crate::record::NameTag;

///
/// Sanitizer
///
/// Total, non-failing normalization over one value. Runs at the
/// persistence boundary, before validation; validation itself never
/// mutates a record.
///

pub trait Sanitizer<T> {
    fn sanitize(&self, value: &mut T);
}

/// Normalize a record in place before validation.
pub(crate) fn sanitize_record(record: &mut NameTag) {
    text::Trim.sanitize(record.tag_mut());

    if let Some(reason) = record.void_reason_mut() {
        text::Trim.sanitize(reason);
    }
}

pub mod text {
    use super::Sanitizer;

    ///
    /// Trim
    ///

    pub struct Trim;

    impl Sanitizer<String> for Trim {
        fn sanitize(&self, value: &mut String) {
            let trimmed = value.trim();

            if trimmed.len() != value.len() {
                *value = trimmed.to_owned();
            }
        }
    }
}
