use crate::{
    report::{FieldContext, ViolationKind},
    traits::Validator,
};

///
/// NotBlank
/// Rejects empty and whitespace-only text. Does not trim; the sanitizer
/// owns normalization.
///

pub struct NotBlank;

impl Validator<str> for NotBlank {
    fn validate(&self, value: &str, ctx: &mut FieldContext<'_>) {
        if value.trim().is_empty() {
            let field = ctx.field();
            ctx.issue(ViolationKind::Required, format!("{field} is required"));
        }
    }
}
