//! Infix operator constructors.
//!
//! Operator applications carry an explicit associativity tag and no range;
//! the positioning pass assigns columns later, and the writer reads them
//! back to decide line-breaking.

use crate::expr::{Associativity, Expression};

/// Build an operator application from its parts.
pub fn operator_application(
    symbol: impl Into<String>,
    direction: Associativity,
    left: Expression,
    right: Expression,
) -> Expression {
    Expression::OperatorApplication {
        symbol: symbol.into(),
        direction,
        left: Box::new(left),
        right: Box::new(right),
        range: None,
    }
}

/// `left == right`. Non-associative, always renders inline.
pub fn equals(left: Expression, right: Expression) -> Expression {
    operator_application("==", Associativity::Non, left, right)
}

/// `left + right`.
pub fn plus(left: Expression, right: Expression) -> Expression {
    operator_application("+", Associativity::Left, left, right)
}

/// `left |> right`.
pub fn pipe(left: Expression, right: Expression) -> Expression {
    operator_application("|>", Associativity::Left, left, right)
}

/// Build a pipe chain from a top expression and stages ordered bottom to
/// top.
///
/// Each stage is consed onto the chain built from the remaining stages, so
/// the last stage the iterator yields renders directly under `top` and the
/// first stage renders last. An empty iterator returns `top` unchanged.
/// Stage ordering is semantically meaningful; it must not be reversed or
/// resorted.
pub fn pipes<I>(top: Expression, stages: I) -> Expression
where
    I: IntoIterator<Item = Expression>,
{
    let mut stages = stages.into_iter();
    match stages.next() {
        None => top,
        Some(stage) => pipe(pipes(top, stages), stage),
    }
}
