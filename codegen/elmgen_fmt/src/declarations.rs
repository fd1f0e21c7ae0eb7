//! Rendering top-level declarations.
//!
//! Declaration formatting builds on the expression and annotation writers
//! by adding the header/body layout: alias and function bodies indent 4,
//! custom-type variants stack in a `= `/`| ` block.

use elmgen_ir::{Declaration, Signature, Variant};

use crate::annotation::{write_argument, write_type_annotation};
use crate::error::WriteError;
use crate::formatter::write_expression;
use crate::writer::Writer;

const INDENT: usize = 4;

/// Render one top-level declaration into writer fragments.
pub fn write_declaration(declaration: &Declaration) -> Result<Writer, WriteError> {
    match declaration {
        Declaration::Alias { name, annotation } => Ok(Writer::breaked(vec![
            Writer::string(format!("type alias {name} =")),
            Writer::indent(INDENT, write_type_annotation(&annotation.annotation)?),
        ])),
        Declaration::CustomType { name, variants } => {
            let items = variants
                .iter()
                .map(write_variant)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Writer::breaked(vec![
                Writer::string(format!("type {name}")),
                Writer::indent(INDENT, Writer::sep_by(("= ", "| ", ""), true, items)),
            ]))
        }
        Declaration::Function {
            name,
            expression,
            signature,
        } => Ok(Writer::breaked(vec![
            write_signature(signature)?,
            Writer::string(format!("{name} =")),
            Writer::indent(INDENT, write_expression(expression)?),
        ])),
    }
}

/// Render a set of declarations, separated Elm-style by two blank lines.
pub fn write_declarations(declarations: &[Declaration]) -> Result<String, WriteError> {
    let blocks = declarations
        .iter()
        .map(|declaration| Ok(write_declaration(declaration)?.write()))
        .collect::<Result<Vec<_>, WriteError>>()?;
    Ok(blocks.join("\n\n\n"))
}

fn write_signature(signature: &Signature) -> Result<Writer, WriteError> {
    Ok(Writer::spaced(vec![
        Writer::string(&signature.name),
        Writer::string(":"),
        write_type_annotation(&signature.type_annotation)?,
    ]))
}

fn write_variant(variant: &Variant) -> Result<Writer, WriteError> {
    let mut items = vec![Writer::string(&variant.name)];
    for annotation in &variant.annotations {
        // Payload types follow the same contains-a-space parenthesization
        // rule as type-constructor arguments.
        items.push(write_argument(&annotation.annotation)?);
    }
    Ok(Writer::spaced(items))
}
