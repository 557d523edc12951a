//! Token types for the argument lexer.
//!
//! Tokens are the output of the lexer and input to the matcher and binder.

/// A classified argument token.
///
/// Every raw input string becomes exactly one token, and every token keeps
/// the index it had in the original argument vector. That index survives
/// binding and merging so the two scopes can reason about the same input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Original text, exactly as it appeared in the input.
    pub raw: String,
    /// Index in the original argument vector.
    pub index: usize,
    /// How the lexer classified this token.
    pub kind: TokenKind,
    /// Associated value text for a flag token: the inline `=` part, or the
    /// text of the following value token.
    pub value: Option<String>,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(raw: String, index: usize, kind: TokenKind, value: Option<String>) -> Self {
        Self {
            raw,
            index,
            kind,
            value,
        }
    }

    /// Returns the flag name if this is a flag token.
    #[must_use]
    pub fn flag_name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Flag { name } => Some(name),
            _ => None,
        }
    }

    /// Returns true if this token is a flag marker.
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self.kind, TokenKind::Flag { .. })
    }

    /// Returns true if this token is a positional argument.
    #[must_use]
    pub const fn is_positional(&self) -> bool {
        matches!(self.kind, TokenKind::Positional)
    }
}

/// Token classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A flag marker like `--name`, `-n`, or `/name`, marker stripped.
    Flag {
        /// The flag name without its marker or inline value.
        name: String,
    },
    /// The token following a flag, claimed as its value.
    Value,
    /// An unflagged argument.
    Positional,
}

/// A token left unmatched by binding, retained for diagnostics.
///
/// Unbound tokens are never silently dropped; callers surface them when
/// rendering errors or help.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnboundToken {
    /// Original text, including any flag marker.
    pub raw: String,
    /// Index in the original argument vector.
    pub index: usize,
}

impl UnboundToken {
    /// Creates an unbound-token record.
    #[must_use]
    pub const fn new(raw: String, index: usize) -> Self {
        Self { raw, index }
    }
}

impl From<&Token> for UnboundToken {
    fn from(token: &Token) -> Self {
        Self::new(token.raw.clone(), token.index)
    }
}
