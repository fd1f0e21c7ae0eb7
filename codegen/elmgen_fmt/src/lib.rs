//! Elmgen Writer
//!
//! Renders `elmgen_ir` trees into syntactically valid, idiomatically
//! formatted Elm source text.
//!
//! # Architecture
//!
//! Rendering is a strict one-directional tree-to-text pipeline:
//!
//! 1. The builder layer in `elmgen_ir` produces annotation, expression,
//!    and declaration trees, and a single top-down pass assigns
//!    indentation columns to expression ranges.
//! 2. The writers here ([`annotation`], [`formatter`], [`declarations`])
//!    traverse those trees and produce [`Writer`] combinator trees.
//! 3. `Writer::write` renders the final text. Writing is pure and
//!    idempotent; no component re-enters an earlier one.
//!
//! Any tree shape outside the modeled grammar subset is a fatal
//! [`WriteError`]; there is no partial-rendering or recovery path.

pub mod annotation;
pub mod declarations;
mod error;
pub mod formatter;
pub mod writer;

pub use annotation::{to_string, write_type_annotation};
pub use declarations::{write_declaration, write_declarations};
pub use error::WriteError;
pub use formatter::write_expression;
pub use writer::Writer;
