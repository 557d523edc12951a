//! Staging builder and frozen configuration.
//!
//! Registration happens once, on a mutable [`Builder`]; freezing produces
//! one immutable [`Configuration`] value that every parse call reads and
//! none mutates. A frozen configuration is safe to share across threads as
//! long as the supplied converter and factory collaborators are.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rudder_foundation::convert::TypeConverter;
use rudder_foundation::error::BoxError;
use rudder_foundation::value::Value;
use rudder_parser::descriptor::{
    CommandDescriptor, OperationFn, ParameterDescriptor, TypeIdentity,
};
use rudder_parser::normalize::strip_command_suffix;

use crate::convert::DefaultConverter;
use crate::invoke::{ConstructorFactory, InstanceFactory};

/// One named, parameterized operation under a command.
pub struct Operation {
    name: String,
    parameters: Vec<Arc<ParameterDescriptor>>,
    handler: OperationFn,
    help: Option<String>,
}

impl Operation {
    /// Creates an operation with its bound body.
    ///
    /// The body receives the factory-resolved instance and the converted
    /// arguments in declared-signature order.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        handler: impl Fn(&mut dyn Any, &[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            handler: Arc::new(handler),
            help: None,
        }
    }

    /// Appends a declared signature parameter. Declaration order is the
    /// order positional inference and invocation use.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(Arc::new(parameter));
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// A registered command: a named group of operations.
///
/// The name is normalized at registration: a conventional `Controller`
/// suffix is stripped, so `Command::new("MathController")` is addressed as
/// `math`.
pub struct Command {
    name: String,
    type_identity: TypeIdentity,
    operations: Vec<Operation>,
    converter: Option<Arc<dyn TypeConverter>>,
    ignore_global_required: bool,
    help: Option<String>,
}

impl Command {
    /// Creates a command with the given (suffix-normalized) name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: strip_command_suffix(&name).to_string(),
            type_identity: TypeIdentity::unit(),
            operations: Vec::new(),
            converter: None,
            ignore_global_required: false,
            help: None,
        }
    }

    /// Sets the owning type identity, resolved through the instance
    /// factory at invoke time.
    #[must_use]
    pub fn owned_by(mut self, identity: TypeIdentity) -> Self {
        self.type_identity = identity;
        self
    }

    /// Adds an operation.
    #[must_use]
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Overrides the configured type converter for this command's scope.
    #[must_use]
    pub fn with_converter(mut self, converter: impl TypeConverter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Exempts this command from the global required check: unmatched
    /// required globals no longer fail a parse that dispatches here.
    #[must_use]
    pub fn ignore_global_required(mut self) -> Self {
        self.ignore_global_required = true;
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("type_identity", &self.type_identity)
            .field("operations", &self.operations)
            .field("ignore_global_required", &self.ignore_global_required)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}

/// Staging builder for a [`Configuration`].
///
/// Mirrors the registration surface: global parameters, commands with
/// their operations, constructors for the default factory, and the
/// pluggable collaborators. `freeze` consumes the builder.
#[derive(Default)]
pub struct Builder {
    globals: Vec<Arc<ParameterDescriptor>>,
    commands: Vec<Command>,
    constructors: ConstructorFactory,
    factory: Option<Arc<dyn InstanceFactory>>,
    converter: Option<Arc<dyn TypeConverter>>,
    disallow_inference: bool,
}

impl Builder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a global parameter, recognized regardless of which
    /// command matches.
    #[must_use]
    pub fn parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.globals.push(Arc::new(parameter));
        self
    }

    /// Registers a command. Registration order is the matcher's tie-break
    /// order; duplicate registrations are resolved silently by order.
    #[must_use]
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    /// Registers a parameterless constructor with the default factory.
    #[must_use]
    pub fn constructor(
        mut self,
        identity: TypeIdentity,
        construct: impl Fn() -> Box<dyn Any> + Send + Sync + 'static,
    ) -> Self {
        self.constructors.register(identity, construct);
        self
    }

    /// Replaces the default converter.
    #[must_use]
    pub fn type_converter(mut self, converter: impl TypeConverter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    /// Replaces the default instance factory.
    #[must_use]
    pub fn instance_factory(mut self, factory: impl InstanceFactory + 'static) -> Self {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Disables positional inference for every scope.
    #[must_use]
    pub fn disallow_positional_inference(mut self) -> Self {
        self.disallow_inference = true;
        self
    }

    /// Freezes the staged registrations into an immutable configuration.
    #[must_use]
    pub fn freeze(self) -> Configuration {
        let mut descriptors = Vec::new();
        for command in self.commands {
            for operation in command.operations {
                descriptors.push(CommandDescriptor {
                    command: command.name.clone(),
                    operation: operation.name,
                    parameters: operation.parameters,
                    type_identity: command.type_identity.clone(),
                    handler: operation.handler,
                    converter: command.converter.clone(),
                    ignore_global_required: command.ignore_global_required,
                    help: operation.help.or_else(|| command.help.clone()),
                });
            }
        }

        Configuration {
            globals: self.globals,
            commands: descriptors,
            converter: self
                .converter
                .unwrap_or_else(|| Arc::new(DefaultConverter::new())),
            factory: self
                .factory
                .unwrap_or_else(|| Arc::new(self.constructors)),
            infer_positional: !self.disallow_inference,
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("globals", &self.globals)
            .field("commands", &self.commands)
            .field("disallow_inference", &self.disallow_inference)
            .finish_non_exhaustive()
    }
}

/// A frozen registration set.
///
/// Constructed once at configuration time and read-only thereafter; parse
/// calls allocate fresh results and never mutate the configuration, so
/// concurrent parses against one configuration are safe provided the
/// converter and factory collaborators are.
#[derive(Clone)]
pub struct Configuration {
    globals: Vec<Arc<ParameterDescriptor>>,
    commands: Vec<CommandDescriptor>,
    converter: Arc<dyn TypeConverter>,
    factory: Arc<dyn InstanceFactory>,
    infer_positional: bool,
}

impl Configuration {
    /// The registered global parameter descriptors, in registration order.
    #[must_use]
    pub fn global_parameters(&self) -> &[Arc<ParameterDescriptor>] {
        &self.globals
    }

    /// The registered command descriptors, in registration order.
    #[must_use]
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// The configured type converter.
    #[must_use]
    pub fn converter(&self) -> &Arc<dyn TypeConverter> {
        &self.converter
    }

    /// The configured instance factory.
    #[must_use]
    pub fn factory(&self) -> &Arc<dyn InstanceFactory> {
        &self.factory
    }

    /// Whether positional inference is enabled.
    #[must_use]
    pub const fn infers_positional(&self) -> bool {
        self.infer_positional
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("globals", &self.globals)
            .field("commands", &self.commands)
            .field("infer_positional", &self.infer_positional)
            .finish_non_exhaustive()
    }
}
