//! Core runtime for nametag: the name-tag record, composable field rules,
//! violation reports, and the in-memory registry exported via the `prelude`.

pub mod error;
pub mod record;
pub mod registry;
pub mod report;
pub mod sanitize;
pub mod traits;
pub mod validator;

///
/// CONSTANTS
///

/// Maximum length of a name tag, in characters.
///
/// The persisted tag column is 50 characters wide; the length rule reports
/// `TooLong` past this bound.
pub const TAG_MAX_LEN: usize = 50;

/// Maximum length of a void reason, in characters.
pub const VOID_REASON_MAX_LEN: usize = 255;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, registries, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        record::{NameTag, TagId},
        report::{Report, Violation, ViolationKind},
        traits::{TagLookup, Validator},
        validator::NameTagValidator,
    };
}
