//! Default type conversion.
//!
//! Implements the [`TypeConverter`] contract for the primitive tags and
//! keeps a registry of caller-supplied converters for custom tags.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rudder_foundation::convert::{ConvertContext, TypeConverter};
use rudder_foundation::error::{BoxError, Error};
use rudder_foundation::types::TypeTag;
use rudder_foundation::value::Value;

/// A registered converter for one custom tag.
pub type CustomConvertFn =
    Arc<dyn Fn(&str, &ConvertContext<'_>) -> Result<Value, BoxError> + Send + Sync>;

/// The default converter.
///
/// Covers the primitive tags directly and resolves `Custom` tags through
/// its registry; an unregistered custom tag is a typed failure, not a
/// panic. Text passes through verbatim, numbers parse after trimming,
/// booleans accept the usual spellings, and enum values match their
/// variants case-insensitively.
#[derive(Clone, Default)]
pub struct DefaultConverter {
    custom: HashMap<String, CustomConvertFn>,
}

impl DefaultConverter {
    /// Creates a converter with an empty custom registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter for a custom tag.
    #[must_use]
    pub fn with_custom(
        mut self,
        tag: impl Into<String>,
        convert: impl Fn(&str, &ConvertContext<'_>) -> Result<Value, BoxError> + Send + Sync + 'static,
    ) -> Self {
        self.custom.insert(tag.into(), Arc::new(convert));
        self
    }

    fn convert_bool(raw: &str) -> Option<bool> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl TypeConverter for DefaultConverter {
    fn convert(
        &self,
        target: &TypeTag,
        raw: &str,
        context: &ConvertContext<'_>,
    ) -> Result<Value, BoxError> {
        match target {
            TypeTag::Text => Ok(Value::Text(raw.to_string())),
            TypeTag::Int => Ok(Value::Int(raw.trim().parse::<i64>()?)),
            TypeTag::Float => Ok(Value::Float(raw.trim().parse::<f64>()?)),
            TypeTag::Bool => Self::convert_bool(raw)
                .map(Value::Bool)
                .ok_or_else(|| format!("not a boolean: {raw:?}").into()),
            TypeTag::Enum(variants) => variants
                .iter()
                .find(|variant| variant.eq_ignore_ascii_case(raw.trim()))
                .map(|variant| Value::Enum(variant.clone()))
                .ok_or_else(|| {
                    format!("expected one of [{}], got {raw:?}", variants.join(", ")).into()
                }),
            TypeTag::Custom(tag) => match self.custom.get(tag) {
                Some(convert) => convert(raw, context),
                None => Err(Box::new(Error::unknown_type_tag(tag.clone()))),
            },
        }
    }
}

impl fmt::Debug for DefaultConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.custom.keys().collect();
        tags.sort();
        f.debug_struct("DefaultConverter")
            .field("custom", &tags)
            .finish()
    }
}
