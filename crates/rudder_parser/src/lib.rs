//! Lexer, command matcher, parameter binder, and merge engine for Rudder.
//!
//! This crate transforms a raw argument vector like `["math", "add", "3",
//! "4", "--verbose"]` into bound, typed parameter sets ready for dispatch.
//!
//! # Architecture
//!
//! ```text
//! ["math", "add", "3", "4"]
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   LEXER         │  → [Positional, Positional, Positional, Positional]
//! └─────────────────┘
//!          │
//!          ├──────────────────────────────┐
//!          ▼                              ▼
//! ┌─────────────────┐            ┌─────────────────┐
//! │ BINDER          │            │ COMMAND         │
//! │ (global scope)  │            │ MATCHER         │  → math/add descriptor
//! └─────────────────┘            └─────────────────┘
//!          │                              │
//!          │                              ▼
//!          │                     ┌─────────────────┐
//!          │                     │ BINDER          │  → a="3", b="4"
//!          │                     │ (command scope) │
//!          │                     └─────────────────┘
//!          ▼                              │
//! ┌────────────────────────────────────────┐
//! │ MERGE ENGINE                           │  → one binding, command wins
//! └────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`token`] - Indexed, classified tokens
//! - [`lexer`] - Total classification of raw argument strings
//! - [`normalize`] - Case-insensitive name matching and naming conventions
//! - [`descriptor`] - Parameter and command descriptors
//! - [`matcher`] - First-registration-wins command matching
//! - [`binder`] - Generic flag and positional-inference binding
//! - [`merge`] - Global/command scope reconciliation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binder;
pub mod descriptor;
pub mod lexer;
pub mod matcher;
pub mod merge;
pub mod normalize;
pub mod token;


pub use binder::{bind, Binding, BoundParameter};
pub use descriptor::{BindAction, CommandDescriptor, OperationFn, ParameterDescriptor, TypeIdentity};
pub use lexer::lex;
pub use matcher::match_command;
pub use merge::merge;
pub use token::{Token, TokenKind, UnboundToken};
