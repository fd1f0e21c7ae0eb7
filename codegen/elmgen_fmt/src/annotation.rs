//! Rendering type annotations.

use elmgen_ir::{Annotation, Field, TypeAnnotation};

use crate::error::WriteError;
use crate::writer::Writer;

/// Render an annotation's type shape to a string.
///
/// Only the shape is rendered. The alias registry is never serialized
/// inline; callers emit it as separate top-level declarations via
/// `elmgen_ir::alias_declarations`.
pub fn to_string(annotation: &Annotation) -> Result<String, WriteError> {
    Ok(write_type_annotation(&annotation.annotation)?.write())
}

/// Render a type shape into writer fragments.
pub fn write_type_annotation(annotation: &TypeAnnotation) -> Result<Writer, WriteError> {
    match annotation {
        TypeAnnotation::Typed { name, args } => {
            let mut items = vec![Writer::string(name)];
            for arg in args {
                items.push(write_argument(arg)?);
            }
            Ok(Writer::spaced(items))
        }
        TypeAnnotation::Generic(name) => Ok(Writer::string(name)),
        TypeAnnotation::Record(fields) => write_record(fields),
    }
}

/// Render a type used in argument position, parenthesized iff its
/// rendered text contains a space.
///
/// The check is textual, on the rendered output, not structural: compound
/// shapes like `Maybe String` pick up parens, atomic ones like `String`
/// don't.
pub(crate) fn write_argument(annotation: &TypeAnnotation) -> Result<Writer, WriteError> {
    let rendered = write_type_annotation(annotation)?.write();
    if rendered.contains(' ') {
        Ok(Writer::paren(Writer::string(rendered)))
    } else {
        Ok(Writer::string(rendered))
    }
}

fn write_record(fields: &[Field]) -> Result<Writer, WriteError> {
    if fields.is_empty() {
        return Err(WriteError::EmptyRecord);
    }
    let items = fields
        .iter()
        .map(write_field)
        .collect::<Result<Vec<_>, _>>()?;
    if items.len() == 1 {
        Ok(Writer::sep_by(("{ ", ", ", " }"), false, items))
    } else {
        Ok(Writer::sep_by(("{ ", ", ", "}"), true, items))
    }
}

fn write_field(field: &Field) -> Result<Writer, WriteError> {
    Ok(Writer::spaced(vec![
        Writer::string(&field.name),
        Writer::string(":"),
        write_type_annotation(&field.annotation.annotation)?,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitives_render_bare() {
        assert_eq!(to_string(&Annotation::string()), Ok("String".to_owned()));
        assert_eq!(to_string(&Annotation::int()), Ok("Int".to_owned()));
        assert_eq!(to_string(&Annotation::float()), Ok("Float".to_owned()));
        assert_eq!(to_string(&Annotation::bool()), Ok("Bool".to_owned()));
    }

    #[test]
    fn compound_argument_stays_bare_when_atomic() {
        let annotation = Annotation::maybe(Annotation::string());
        assert_eq!(to_string(&annotation), Ok("Maybe String".to_owned()));
    }

    #[test]
    fn nested_compound_argument_gets_parens() {
        let annotation = Annotation::maybe(Annotation::list(Annotation::string()));
        assert_eq!(to_string(&annotation), Ok("Maybe (List String)".to_owned()));
    }

    #[test]
    fn unit_renders_bare() {
        assert_eq!(to_string(&Annotation::unit()), Ok("()".to_owned()));
    }

    #[test]
    fn explicitly_typed_shape_parenthesizes_compound_arguments() {
        let annotation = Annotation::typed(
            "Result",
            vec![Annotation::string(), Annotation::list(Annotation::int())],
        );
        assert_eq!(to_string(&annotation), Ok("Result String (List Int)".to_owned()));
    }

    #[test]
    fn alias_renders_only_its_name() {
        let annotation = Annotation::alias("something", Annotation::string());
        assert_eq!(to_string(&annotation), Ok("Something".to_owned()));
    }

    #[test]
    fn generic_renders_bare_variable() {
        let annotation = TypeAnnotation::generic("a");
        assert_eq!(
            write_type_annotation(&annotation).map(|w| w.write()),
            Ok("a".to_owned())
        );
    }

    #[test]
    fn single_field_record_renders_inline() {
        let annotation = Annotation::record(vec![("hello", Annotation::string())]);
        assert_eq!(to_string(&annotation), Ok("{ hello : String }".to_owned()));
    }

    #[test]
    fn multi_field_record_renders_as_block() {
        let annotation = Annotation::record(vec![
            ("hello", Annotation::string()),
            ("world", Annotation::string()),
        ]);
        assert_eq!(
            to_string(&annotation),
            Ok("{ hello : String\n, world : String\n}".to_owned())
        );
    }

    #[test]
    fn zero_field_record_is_fatal() {
        let annotation = Annotation::record(Vec::<(String, Annotation)>::new());
        assert_eq!(to_string(&annotation), Err(WriteError::EmptyRecord));
    }

    #[test]
    fn record_argument_is_parenthesized() {
        let record = Annotation::record(vec![("hello", Annotation::string())]);
        let annotation = Annotation::maybe(record);
        assert_eq!(
            to_string(&annotation),
            Ok("Maybe ({ hello : String })".to_owned())
        );
    }
}
