//! Elmgen IR - Typed Elm Source Model
//!
//! This crate contains the core data structures for the elmgen code
//! generator:
//! - `Range` line-break hints attached to expression nodes
//! - `TypeAnnotation` / `Annotation` type shapes with their alias registries
//! - `Expression` nodes for the generated subset of Elm
//! - `Declaration` top-level items (aliases, custom types, functions)
//!
//! # Design Philosophy
//!
//! Values are built once by the constructor layer, positioned by a single
//! top-down column-assignment pass (`set_range_column`), then handed to
//! `elmgen_fmt` for rendering. Nothing here performs I/O, and no tree is
//! ever shared between callers; ownership is strictly tree-shaped except
//! the alias registry, which is a side-channel value merged during
//! annotation composition.

mod annotation;
mod decl;
mod expr;
mod op;
mod range;

pub use annotation::{capitalize, AliasMap, Annotation, Field, TypeAnnotation};
pub use decl::{alias_declarations, Declaration, DeclarationError, Signature, Variant};
pub use expr::{
    apply, if_block, int, lambda, list, literal, parenthesized, value, value_in, Associativity,
    Expression,
};
pub use op::{equals, operator_application, pipe, pipes, plus};
pub use range::Range;
