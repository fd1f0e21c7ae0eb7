//! Rendering expressions.
//!
//! The one genuine decision here is operator line-breaking: a side of an
//! operator application breaks iff the positioning pass set its range row
//! positive. The writer never measures rendered width; the hint is
//! precomputed.

use elmgen_ir::{Associativity, Expression, Range};

use crate::error::WriteError;
use crate::writer::Writer;

/// Standard Elm body indent; continuations indent this far past their
/// operator's column.
const INDENT: usize = 4;

/// Render an expression into writer fragments.
pub fn write_expression(expression: &Expression) -> Result<Writer, WriteError> {
    match expression {
        Expression::OperatorApplication {
            symbol,
            direction,
            left,
            right,
            range,
        } => write_operator_application(symbol, *direction, left, right, *range),
        Expression::FunctionOrValue {
            qualifier, name, ..
        } => Ok(write_reference(qualifier, name)),
        Expression::Int { value, .. } => Ok(Writer::string(value.to_string())),
        Expression::Literal { value, .. } => Ok(Writer::literal(value)),
        Expression::List { members, .. } => write_list(members),
        Expression::Application { expressions, .. } => write_application(expressions),
        Expression::Parenthesized { inner, .. } => Ok(Writer::paren(write_expression(inner)?)),
        Expression::Lambda { args, body, .. } => Ok(Writer::spaced(vec![
            Writer::join(vec![Writer::string("\\"), Writer::string(args.join(" "))]),
            Writer::string("->"),
            write_expression(body)?,
        ])),
        Expression::IfBlock {
            condition,
            then_branch,
            else_branch,
            ..
        } => Ok(Writer::spaced(vec![
            Writer::string("if"),
            write_expression(condition)?,
            Writer::string("then"),
            write_expression(then_branch)?,
            Writer::string("else"),
            write_expression(else_branch)?,
        ])),
    }
}

fn write_reference(qualifier: &[String], name: &str) -> Writer {
    if qualifier.is_empty() {
        return Writer::string(name);
    }
    let mut parts = Vec::with_capacity(qualifier.len() * 2 + 1);
    for segment in qualifier {
        parts.push(Writer::string(segment));
        parts.push(Writer::string("."));
    }
    parts.push(Writer::string(name));
    Writer::join(parts)
}

fn write_operator_application(
    symbol: &str,
    direction: Associativity,
    left: &Expression,
    right: &Expression,
    range: Option<Range>,
) -> Result<Writer, WriteError> {
    match direction {
        Associativity::Left => {
            let break_left = left.range().breaks();
            let break_right = right.range().breaks();
            if break_left || break_right {
                let column = range.unwrap_or_default().column as usize;
                let left_writer = write_expression(left)?;
                let left_writer = if break_left {
                    Writer::indent(INDENT + column, left_writer)
                } else {
                    left_writer
                };
                Ok(Writer::breaked(vec![
                    left_writer,
                    Writer::indent(
                        INDENT + column,
                        Writer::spaced(vec![Writer::string(symbol), write_expression(right)?]),
                    ),
                ]))
            } else {
                Ok(Writer::spaced(vec![
                    write_expression(left)?,
                    Writer::string(symbol),
                    write_expression(right)?,
                ]))
            }
        }
        // Postfix layout for the language's rare postfix operators.
        Associativity::Right => Ok(Writer::spaced(vec![
            write_expression(left)?,
            write_expression(right)?,
            Writer::string(symbol),
        ])),
        Associativity::Non => Ok(Writer::spaced(vec![
            write_expression(left)?,
            Writer::string(symbol),
            write_expression(right)?,
        ])),
    }
}

fn write_list(members: &[Expression]) -> Result<Writer, WriteError> {
    if members.is_empty() {
        return Ok(Writer::string("[]"));
    }
    let items = members
        .iter()
        .map(write_expression)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Writer::sep_by(("[ ", ", ", " ]"), false, items))
}

fn write_application(expressions: &[Expression]) -> Result<Writer, WriteError> {
    match expressions.split_first() {
        None => Ok(Writer::string("")),
        Some((head, [])) => write_expression(head),
        Some((head, arguments)) => {
            let items = arguments
                .iter()
                .map(write_expression)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Writer::spaced(vec![
                write_expression(head)?,
                Writer::sep_by(("", " ", ""), false, items),
            ]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elmgen_ir::{apply, equals, int, lambda, list, literal, pipe, pipes, plus, value, value_in};
    use pretty_assertions::assert_eq;

    fn render(expression: &Expression) -> String {
        write_expression(expression)
            .map(|writer| writer.write())
            .unwrap_or_else(|error| panic!("render failed: {error}"))
    }

    #[test]
    fn value_renders_bare_name() {
        assert_eq!(render(&value("model", None, None)), "model");
    }

    #[test]
    fn qualified_value_joins_with_dots() {
        let expression = value_in(&["Json", "Decode"], "succeed", None, None);
        assert_eq!(render(&expression), "Json.Decode.succeed");
    }

    #[test]
    fn literal_renders_quoted() {
        assert_eq!(render(&literal("hello")), "\"hello\"");
    }

    #[test]
    fn application_space_joins_arguments() {
        let expression = apply(
            value_in(&["Decode"], "field", None, None),
            vec![literal("age"), value_in(&["Decode"], "int", None, None)],
            None,
        );
        assert_eq!(render(&expression), "Decode.field \"age\" Decode.int");
    }

    #[test]
    fn single_expression_application_renders_bare() {
        let expression = apply(value("model", None, None), Vec::new(), None);
        assert_eq!(render(&expression), "model");
    }

    #[test]
    fn list_renders_inline() {
        assert_eq!(render(&list(vec![int(1), int(2)])), "[ 1, 2 ]");
        assert_eq!(render(&list(Vec::new())), "[]");
    }

    #[test]
    fn lambda_renders_backslash_arrow() {
        let expression = lambda(&["x", "y"], plus(value("x", None, None), value("y", None, None)));
        assert_eq!(render(&expression), "\\x y -> x + y");
    }

    #[test]
    fn parenthesized_wraps() {
        let inner = plus(int(1), int(2));
        let expression = Expression::Parenthesized {
            inner: Box::new(inner),
            range: None,
        };
        assert_eq!(render(&expression), "(1 + 2)");
    }

    #[test]
    fn non_associative_operator_renders_inline() {
        let mut expression = equals(value("a", None, None), value("b", None, None));
        // A break hint on a Non operator's operand is ignored.
        if let Expression::OperatorApplication { right, .. } = &mut expression {
            right.set_range(Range::new(1, 0));
        }
        assert_eq!(render(&expression), "a == b");
    }

    #[test]
    fn unbroken_left_operator_renders_inline() {
        let expression = plus(int(1), int(2));
        assert_eq!(render(&expression), "1 + 2");
    }

    #[test]
    fn broken_right_operand_stacks_with_continuation_indent() {
        let mut expression = pipe(
            value("start", None, None),
            apply(value("stage", None, None), vec![int(1)], None),
        );
        if let Expression::OperatorApplication { right, .. } = &mut expression {
            right.set_range(Range::new(1, 0));
        }
        expression.set_range_column(4);
        assert_eq!(render(&expression), "start\n        |> stage 1");
    }

    #[test]
    fn pipe_chain_renders_top_then_stages_in_reverse_iterator_order() {
        let top = value("start", None, None);
        let mut stage_one = apply(value("stageOne", None, None), Vec::new(), None);
        let mut stage_two = apply(value("stageTwo", None, None), Vec::new(), None);
        stage_one.set_range(Range::new(1, 0));
        stage_two.set_range(Range::new(2, 0));

        let mut chain = pipes(top, vec![stage_one, stage_two]);
        chain.set_range_column(0);

        assert_eq!(render(&chain), "start\n    |> stageTwo\n    |> stageOne");
    }

    #[test]
    fn three_stage_pipe_chain_line_order() {
        let top = value_in(&["Decode"], "succeed", None, None);
        let mut stages = Vec::new();
        for name in ["first", "second", "third"] {
            let mut stage = apply(value(name, None, None), Vec::new(), None);
            stage.set_range(Range::new(1, 0));
            stages.push(stage);
        }
        let mut chain = pipes(top, stages);
        chain.set_range_column(4);

        assert_eq!(
            render(&chain),
            "Decode.succeed\n        |> third\n        |> second\n        |> first"
        );
    }
}
