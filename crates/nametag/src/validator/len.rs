use crate::{
    report::{FieldContext, ViolationKind},
    traits::Validator,
};

///
/// HasLen
///
/// Length as seen by the rule set: characters for text, so multi-byte
/// input is not penalized.
///

#[allow(clippy::len_without_is_empty)]
pub trait HasLen {
    fn len(&self) -> usize;
}

impl HasLen for str {
    fn len(&self) -> usize {
        self.chars().count()
    }
}

impl HasLen for String {
    fn len(&self) -> usize {
        HasLen::len(self.as_str())
    }
}

///
/// Max
///

pub struct Max {
    target: usize,
}

impl Max {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<T: HasLen + ?Sized> Validator<T> for Max {
    fn validate(&self, value: &T, ctx: &mut FieldContext<'_>) {
        let len = value.len();

        if len > self.target {
            ctx.issue(
                ViolationKind::TooLong,
                format!("length ({len}) is greater than maximum of {}", self.target),
            );
        }
    }
}
