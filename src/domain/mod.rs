//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the three classified contact
//! fields: phone numbers, zip codes, and colors. These value objects provide
//! validation at construction time so that an invalid field can never reach
//! an assembled record.

pub mod color;
pub mod errors;
pub mod phone;
pub mod zip_code;

pub use color::Color;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use zip_code::ZipCode;
