//! The per-call parse pipeline and its outcomes.
//!
//! Each parse call runs `lex → global bind → match → command bind → merge
//! → validate → convert` over fresh, call-local state; the configuration
//! is only ever read. The pipeline ends in a dispatch-ready outcome, a
//! validated global-only outcome, or a typed failure.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use rudder_foundation::convert::ConvertContext;
use rudder_foundation::error::{Error, Result};
use rudder_foundation::value::Value;
use rudder_parser::binder::{bind, Binding};
use rudder_parser::descriptor::CommandDescriptor;
use rudder_parser::lexer::lex;
use rudder_parser::matcher::match_command;
use rudder_parser::merge::merge;

use crate::build::Configuration;
use crate::invoke::{run_bind_actions, InstanceFactory, InvokeError};

/// A successful parse.
///
/// Either a command matched and the result is ready to dispatch, or no
/// command matched and the validated global binding stands alone. Both
/// variants retain bound parameters and unbound tokens for diagnostics.
#[derive(Debug)]
pub enum Parsed {
    /// A command matched; arguments are converted and invocable.
    Dispatch(Dispatch),
    /// No registered command matched the identifier tokens.
    GlobalOnly(Binding),
}

impl Parsed {
    /// The binding backing this outcome (merged, for a dispatch).
    #[must_use]
    pub fn binding(&self) -> &Binding {
        match self {
            Self::Dispatch(dispatch) => dispatch.binding(),
            Self::GlobalOnly(binding) => binding,
        }
    }

    /// Returns true if a command matched.
    #[must_use]
    pub const fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }

    /// Invokes this outcome.
    ///
    /// Fires the default actions of bound parameters with their raw
    /// values; for a dispatch, then resolves the owning instance and calls
    /// the operation body. A global-only outcome yields `Value::Nil`.
    ///
    /// # Errors
    /// `InvokeError::Setup` when the factory cannot resolve the owning
    /// type; `InvokeError::Operation` carrying the operation body's own
    /// failure, unchanged.
    pub fn invoke(&self) -> std::result::Result<Value, InvokeError> {
        match self {
            Self::Dispatch(dispatch) => dispatch.invoke(),
            Self::GlobalOnly(binding) => {
                run_bind_actions(binding);
                Ok(Value::Nil)
            }
        }
    }
}

/// A dispatch-ready parse result.
///
/// Extends the merged binding with the resolved command, the converted
/// arguments in declared-signature order, and the factory that will
/// instantiate the owning type.
#[derive(Clone)]
pub struct Dispatch {
    binding: Binding,
    command: CommandDescriptor,
    arguments: Vec<Value>,
    factory: Arc<dyn InstanceFactory>,
}

impl Dispatch {
    /// The merged binding: bound parameters from both scopes plus the
    /// unbound leftovers.
    #[must_use]
    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// The resolved command descriptor.
    #[must_use]
    pub fn command(&self) -> &CommandDescriptor {
        &self.command
    }

    /// Converted argument values, in declared-signature order regardless
    /// of the order tokens appeared on the input. An optional parameter
    /// that was never bound appears as `Value::Nil`.
    #[must_use]
    pub fn arguments(&self) -> &[Value] {
        &self.arguments
    }

    /// Resolves the owning instance and calls the operation body.
    ///
    /// # Errors
    /// `InvokeError::Setup` when the factory cannot resolve the owning
    /// type; `InvokeError::Operation` carrying the operation body's own
    /// failure, unchanged.
    pub fn invoke(&self) -> std::result::Result<Value, InvokeError> {
        run_bind_actions(&self.binding);
        let mut instance = self.factory.resolve(&self.command.type_identity)?;
        (self.command.handler)(instance.as_mut(), &self.arguments)
            .map_err(InvokeError::Operation)
    }
}

impl fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("binding", &self.binding)
            .field("command", &self.command)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}

impl Configuration {
    /// Parses an argument vector against this frozen configuration.
    ///
    /// # Errors
    /// - Missing-required: one or more required descriptors (global and/or
    ///   command scope) stayed unbound; the failure lists the complete
    ///   missing set.
    /// - Conversion: a bound raw value could not be converted to its
    ///   declared type; the whole parse aborts, no partial binding is
    ///   surfaced.
    pub fn parse<I, S>(&self, args: I) -> Result<Parsed>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = lex(args);
        let global = bind(
            self.global_parameters(),
            &tokens,
            self.infers_positional(),
        );

        let Some(command) = match_command(self.commands(), &tokens) else {
            return Self::validated(global).map(Parsed::GlobalOnly);
        };
        let command = command.clone();

        let scope = bind(&command.parameters, &tokens[2..], self.infers_positional());

        let mut claimed: BTreeSet<usize> = tokens[..2].iter().map(|t| t.index).collect();
        claimed.extend(scope.bound().iter().map(|b| b.index));

        let merged = merge(&global, &scope, &claimed);

        // The merged required check spans both scopes unless the command
        // opted out of global enforcement.
        let missing = if command.ignore_global_required {
            scope.missing_required()
        } else {
            merged.missing_required()
        };
        if !missing.is_empty() {
            return Err(Error::missing_required(missing));
        }

        let arguments = self.convert_arguments(&command, &merged)?;

        Ok(Parsed::Dispatch(Dispatch {
            binding: merged,
            command,
            arguments,
            factory: Arc::clone(self.factory()),
        }))
    }

    /// Validates a global-only binding against its required set.
    fn validated(binding: Binding) -> Result<Binding> {
        let missing = binding.missing_required();
        if missing.is_empty() {
            Ok(binding)
        } else {
            Err(Error::missing_required(missing))
        }
    }

    /// Converts the command's bound parameters in declared order.
    fn convert_arguments(
        &self,
        command: &CommandDescriptor,
        merged: &Binding,
    ) -> Result<Vec<Value>> {
        let converter = command.converter.as_ref().unwrap_or_else(|| self.converter());

        let mut arguments = Vec::with_capacity(command.parameters.len());
        for parameter in &command.parameters {
            let bound = merged
                .bound()
                .iter()
                .find(|b| Arc::ptr_eq(&b.descriptor, parameter));
            let Some(bound) = bound else {
                arguments.push(Value::Nil);
                continue;
            };

            let context = ConvertContext::new(&parameter.name);
            let value = converter
                .convert(&parameter.type_tag, &bound.raw, &context)
                .map_err(|source| {
                    Error::conversion(
                        parameter.name.clone(),
                        bound.raw.clone(),
                        parameter.type_tag.clone(),
                        source,
                    )
                })?;
            arguments.push(value);
        }
        Ok(arguments)
    }
}
