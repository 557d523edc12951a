//! Parameter and command descriptors.
//!
//! Descriptors are built once at configuration time and are read-only for
//! the rest of the process; parse calls only ever read them. They are
//! shared as `Arc` so bindings can reference them without copying.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use rudder_foundation::convert::TypeConverter;
use rudder_foundation::error::BoxError;
use rudder_foundation::types::TypeTag;
use rudder_foundation::value::Value;

/// Callback fired with a bound raw value when a parse result is invoked.
pub type BindAction = Arc<dyn Fn(&str) + Send + Sync>;

/// A registered operation body.
///
/// Receives the instance resolved by the factory and the converted
/// arguments in declared-signature order. Failures raised here are the
/// operation's own and are never reinterpreted by the core.
pub type OperationFn = Arc<dyn Fn(&mut dyn Any, &[Value]) -> Result<Value, BoxError> + Send + Sync>;

/// Identity of the type that owns a command's operations.
///
/// The instance factory resolves it to an instance at invoke time. The
/// unit identity stands for commands whose handlers need no instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeIdentity(String);

impl TypeIdentity {
    /// The identity for commands with no owning type.
    #[must_use]
    pub fn unit() -> Self {
        Self("()".to_string())
    }

    /// Creates a type identity from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identity name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the unit identity.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.0 == "()"
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Describes one recognizable parameter.
///
/// Immutable once registered. The same descriptor shape serves both the
/// global scope and a command's declared signature parameters.
#[derive(Clone)]
pub struct ParameterDescriptor {
    /// Canonical name, matched case-insensitively against flag names.
    pub name: String,
    /// Alternate names that also match.
    pub aliases: Vec<String>,
    /// Whether binding fails when this descriptor stays unbound.
    pub required: bool,
    /// Declared type for conversion.
    pub type_tag: TypeTag,
    /// Callback fired with the bound raw value at invoke time.
    pub action: Option<BindAction>,
    /// Help text, stored and exposed but never parsed or generated.
    pub help: Option<String>,
}

impl ParameterDescriptor {
    /// Creates a text-typed, optional descriptor with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            required: false,
            type_tag: TypeTag::Text,
            action: None,
            help: None,
        }
    }

    /// Marks this descriptor required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the declared type.
    #[must_use]
    pub fn typed(mut self, type_tag: TypeTag) -> Self {
        self.type_tag = type_tag;
        self
    }

    /// Adds an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the callback fired with the bound raw value at invoke time.
    #[must_use]
    pub fn on_bind(mut self, action: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Returns true if `name` matches the canonical name or an alias,
    /// case-insensitively.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        crate::normalize::names_match(&self.name, name)
            || self
                .aliases
                .iter()
                .any(|alias| crate::normalize::names_match(alias, name))
    }
}

impl fmt::Debug for ParameterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterDescriptor")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("required", &self.required)
            .field("type_tag", &self.type_tag)
            .field("action", &self.action.as_ref().map(|_| "<fn>"))
            .field("help", &self.help)
            .finish()
    }
}

/// Describes one command/operation pair.
///
/// A command groups operations under its first-positional-token name; each
/// (command, operation) pair gets its own descriptor carrying the ordered
/// signature parameters and the bound operation body.
#[derive(Clone)]
pub struct CommandDescriptor {
    /// Command name, matched against the first positional token.
    pub command: String,
    /// Operation name, matched against the second positional token.
    pub operation: String,
    /// Declared signature parameters, in declaration order.
    pub parameters: Vec<Arc<ParameterDescriptor>>,
    /// Identity of the owning type, resolved through the instance factory.
    pub type_identity: TypeIdentity,
    /// The bound operation body.
    pub handler: OperationFn,
    /// Converter overriding the configured one for this command's scope.
    pub converter: Option<Arc<dyn TypeConverter>>,
    /// When set, the merged required check covers only this command's own
    /// parameters; unmatched required globals do not fail the parse.
    pub ignore_global_required: bool,
    /// Help text, stored and exposed but never parsed or generated.
    pub help: Option<String>,
}

impl CommandDescriptor {
    /// Returns true if the given command and operation names match this
    /// descriptor, case-insensitively.
    #[must_use]
    pub fn matches(&self, command: &str, operation: &str) -> bool {
        crate::normalize::names_match(&self.command, command)
            && crate::normalize::names_match(&self.operation, operation)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("command", &self.command)
            .field("operation", &self.operation)
            .field("parameters", &self.parameters)
            .field("type_identity", &self.type_identity)
            .field("ignore_global_required", &self.ignore_global_required)
            .field("help", &self.help)
            .finish_non_exhaustive()
    }
}
