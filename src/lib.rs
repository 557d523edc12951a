//! Rudder - Argument-recognition and command-dispatch engine
//!
//! This crate re-exports all layers of the Rudder system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rudder_runtime    — Builder, type conversion, invocation
//! Layer 1: rudder_parser     — Lexer, matcher, binder, merge
//! Layer 0: rudder_foundation — Core types (TypeTag, Value, Error)
//! ```

pub use rudder_foundation as foundation;
pub use rudder_parser as parser;
pub use rudder_runtime as runtime;
