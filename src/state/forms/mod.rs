//! Support form domain layer
//!
//! - `field`: field identifiers and the update table
//! - `form_state`: the form controller (validation and submission)
//! - `mailto`: mailto: link composition
//! - `tags`: the fixed tag catalogue

mod field;
mod form_state;
mod mailto;
mod tags;

pub use field::FieldName;
pub use form_state::{FormStatus, SupportForm};
pub use mailto::MailtoLink;
pub use tags::{next_tag, prev_tag, tag_label, TAG_OPTIONS};
