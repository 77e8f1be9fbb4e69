//! Declarative form fields and validation for Nuages
//!
//! This crate provides the validation half of the contact form component:
//! - Field types with length and format constraints ([`CharField`], [`EmailField`])
//! - A bound [`Form`] that turns raw input into cleaned data or per-field errors
//! - Reusable validators ([`EmailValidator`], [`MinLengthValidator`])
//! - Serializable [`FormMetadata`] so a rendering layer can draw the form
//!   without the trait objects
//! - A [`HoneypotField`] spam trap

pub mod field;
pub mod fields;
pub mod form;
pub mod metadata;
pub mod security;
pub mod validators;

pub use field::{FieldError, FieldResult, FormField, Widget};
pub use fields::{CharField, EmailField};
pub use form::{ALL_FIELDS_KEY, Form, FormError, FormResult};
pub use metadata::{FieldMetadata, FormExt, FormMetadata};
pub use security::{HoneypotField, SecurityError};
pub use validators::{EmailValidator, MinLengthValidator};
