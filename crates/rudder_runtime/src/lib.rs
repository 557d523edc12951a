//! Converter registry, frozen configuration, parse pipeline, and invocation
//! for Rudder.
//!
//! This crate assembles the parsing layers into the caller-facing surface:
//! a staging [`Builder`] freezes into one immutable [`Configuration`], each
//! `parse` call runs the lex → bind → match → merge → convert pipeline, and
//! the resulting [`Parsed`] value can be invoked.
//!
//! # Modules
//!
//! - [`convert`] - Default type converter and custom-tag registry
//! - [`invoke`] - Instance factory and operation invocation
//! - [`build`] - Staging builder and frozen configuration
//! - [`dispatch`] - The per-call parse pipeline and its outcomes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod build;
pub mod convert;
pub mod dispatch;
pub mod invoke;

pub use build::{Builder, Command, Configuration, Operation};
pub use convert::DefaultConverter;
pub use dispatch::{Dispatch, Parsed};
pub use invoke::{ConstructorFactory, InstanceFactory, InvokeError};
