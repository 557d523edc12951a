//! Type tags, converted values, and error types for Rudder.
//!
//! This crate provides:
//! - [`TypeTag`] - Declared parameter types for conversion
//! - [`Value`] - Converted argument values
//! - [`Error`] - Rich error types for binding and conversion failures
//! - [`TypeConverter`] - The pluggable conversion collaborator contract

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod error;
pub mod types;
pub mod value;

pub use convert::{ConvertContext, TypeConverter};
pub use error::{BoxError, Error, ErrorKind, MissingParameter, Result};
pub use types::TypeTag;
pub use value::Value;
