//! Instance resolution and operation invocation.
//!
//! A dispatched command resolves its owning instance through a pluggable
//! factory and calls the operation body with converted arguments. Failures
//! from the body itself pass through untouched so a caller can tell "bad
//! input" apart from "command logic failed".

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use rudder_foundation::error::{BoxError, Error};
use rudder_parser::binder::Binding;
use rudder_parser::descriptor::TypeIdentity;

/// Constructor registered for one type identity.
pub type ConstructorFn = Arc<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Resolves a type identity to an instance.
///
/// Invoked once per dispatch; concurrent parse calls may resolve through
/// the same factory from multiple threads, so implementations must be safe
/// for concurrent use (a caller obligation, not something the core can
/// enforce).
pub trait InstanceFactory: Send + Sync {
    /// Resolves an instance of the identified type.
    ///
    /// # Errors
    /// Fails when the factory knows no way to construct the identity.
    fn resolve(&self, identity: &TypeIdentity) -> Result<Box<dyn Any>, Error>;
}

/// The default factory: parameterless construction.
///
/// Holds the constructors registered at build time. The unit identity
/// always resolves, so commands without an owning type need no
/// registration.
#[derive(Clone, Default)]
pub struct ConstructorFactory {
    constructors: HashMap<TypeIdentity, ConstructorFn>,
}

impl ConstructorFactory {
    /// Creates an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a parameterless constructor for a type identity.
    pub fn register(
        &mut self,
        identity: TypeIdentity,
        constructor: impl Fn() -> Box<dyn Any> + Send + Sync + 'static,
    ) {
        self.constructors.insert(identity, Arc::new(constructor));
    }
}

impl InstanceFactory for ConstructorFactory {
    fn resolve(&self, identity: &TypeIdentity) -> Result<Box<dyn Any>, Error> {
        if let Some(constructor) = self.constructors.get(identity) {
            return Ok(constructor());
        }
        if identity.is_unit() {
            return Ok(Box::new(()));
        }
        Err(Error::unknown_type_identity(identity.name()))
    }
}

impl fmt::Debug for ConstructorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut identities: Vec<_> = self.constructors.keys().collect();
        identities.sort_by_key(|identity| identity.name().to_string());
        f.debug_struct("ConstructorFactory")
            .field("constructors", &identities)
            .finish()
    }
}

/// Failure surfaced by invoking a parse result.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The invocation could not be set up (factory resolution failed).
    #[error(transparent)]
    Setup(#[from] Error),

    /// The operation body itself failed.
    ///
    /// Carried through unchanged, never reinterpreted as a binding or
    /// conversion error.
    #[error(transparent)]
    Operation(BoxError),
}

/// Fires the default actions of bound parameters with their raw values.
///
/// Actions run in ascending token-index order, matching the order the
/// values appeared on the input.
pub fn run_bind_actions(binding: &Binding) {
    let mut bound: Vec<_> = binding
        .bound()
        .iter()
        .filter(|b| b.descriptor.action.is_some())
        .collect();
    bound.sort_by_key(|b| b.index);
    for parameter in bound {
        if let Some(action) = &parameter.descriptor.action {
            action(&parameter.raw);
        }
    }
}
