//! Domain value objects and types.
//!
//! This module contains the form's field names and the type-safe email
//! wrapper used by the interaction layer. Value objects validate at
//! construction time so invalid data never reaches the controller.

pub mod email;
pub mod errors;
pub mod field;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use field::FormField;
