//! The type-converter collaborator contract.
//!
//! Conversion is opaque to the core: a converter either yields a value or
//! fails, and any failure aborts the whole parse as a conversion error.
//! The default implementation lives in `rudder_runtime`.

use crate::error::BoxError;
use crate::types::TypeTag;
use crate::value::Value;

/// Context handed to a converter alongside the raw value.
#[derive(Clone, Copy, Debug)]
pub struct ConvertContext<'a> {
    /// Canonical name of the parameter being converted.
    pub parameter: &'a str,
}

impl<'a> ConvertContext<'a> {
    /// Creates a conversion context for the named parameter.
    #[must_use]
    pub const fn new(parameter: &'a str) -> Self {
        Self { parameter }
    }
}

/// Converts a raw token string to a declared parameter type.
///
/// Pluggable per configuration or per command registration. Concurrent
/// parse calls may invoke the same converter from multiple threads, so
/// implementations must be safe for concurrent use; that obligation sits
/// with the caller supplying the converter.
pub trait TypeConverter: Send + Sync {
    /// Converts `raw` to the type named by `target`.
    ///
    /// # Errors
    /// Returns the underlying failure, which the core wraps into a typed
    /// conversion error carrying the parameter name, raw value, and target
    /// tag. A failed conversion is never retried or partially applied.
    fn convert(
        &self,
        target: &TypeTag,
        raw: &str,
        context: &ConvertContext<'_>,
    ) -> Result<Value, BoxError>;
}
