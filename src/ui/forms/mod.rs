//! Form rendering module
//!
//! - `field_renderer`: single-line input rendering
//! - `signup_form`: the username/email signup form component

mod field_renderer;
pub mod signup_form;
