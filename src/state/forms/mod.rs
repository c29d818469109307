//! Form domain layer
//!
//! Types shared between the signup form component and the code that owns its
//! draft: field descriptors, the credentials draft, focus, and the handler
//! capability the form forwards events to.

mod field;
mod form_state;

pub use field::{FieldEdit, SignupField};
pub use form_state::{CredentialsDraft, FormFocus, FormHandler};
