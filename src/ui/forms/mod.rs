//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `support_form`: The contact support card

mod field_renderer;
mod support_form;

pub use support_form::draw_support_form;
