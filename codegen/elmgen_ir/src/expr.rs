//! Expression nodes and the constructor layer.
//!
//! Expressions model the executable subset of Elm the generator emits.
//! Every variant carries an optional [`Range`]: `None` until the
//! positioning pass assigns a column, read back by the writer to decide
//! line-breaking. The model exists for rendering, not type inference;
//! the annotation attached to a node is a hint for composition, never a
//! checked type.

use crate::annotation::TypeAnnotation;
use crate::range::Range;

/// Operator associativity, as declared in Elm.
///
/// Only `Left` operators participate in line-breaking; `Right` and `Non`
/// applications always render inline.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Associativity {
    Left,
    Right,
    Non,
}

/// An expression in the generated subset of Elm.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// An infix operator application: `left |> right`.
    OperatorApplication {
        symbol: String,
        direction: Associativity,
        left: Box<Expression>,
        right: Box<Expression>,
        range: Option<Range>,
    },
    /// A reference to a function or value, optionally module-qualified:
    /// `model`, `Json.Decode.succeed`.
    FunctionOrValue {
        qualifier: Vec<String>,
        name: String,
        annotation: Option<TypeAnnotation>,
        range: Option<Range>,
    },
    /// An integer literal.
    Int { value: i64, range: Option<Range> },
    /// A string literal (unquoted here; the writer adds quotes).
    Literal { value: String, range: Option<Range> },
    /// A list literal.
    List {
        members: Vec<Expression>,
        range: Option<Range>,
    },
    /// Function application: head expression followed by arguments.
    Application {
        expressions: Vec<Expression>,
        annotation: Option<TypeAnnotation>,
        range: Option<Range>,
    },
    /// An explicitly parenthesized expression.
    Parenthesized {
        inner: Box<Expression>,
        range: Option<Range>,
    },
    /// An anonymous function: `\x y -> body`.
    Lambda {
        args: Vec<String>,
        body: Box<Expression>,
        range: Option<Range>,
    },
    /// A conditional: `if c then a else b`.
    IfBlock {
        condition: Box<Expression>,
        then_branch: Box<Expression>,
        else_branch: Box<Expression>,
        range: Option<Range>,
    },
}

impl Expression {
    /// The type this node claims to produce, when one is known.
    ///
    /// Applications take their annotation from the function position only;
    /// arguments never refine it. Lists infer `List a` when empty and the
    /// first member's element type when exactly two members are present,
    /// `None` for any other count (an inherited quirk kept for output
    /// compatibility, see DESIGN.md).
    pub fn annotation_type(&self) -> Option<TypeAnnotation> {
        match self {
            Expression::FunctionOrValue { annotation, .. }
            | Expression::Application { annotation, .. } => annotation.clone(),
            Expression::Int { .. } => Some(TypeAnnotation::typed("Int", Vec::new())),
            Expression::Literal { .. } => Some(TypeAnnotation::typed("String", Vec::new())),
            Expression::List { members, .. } => match members.len() {
                0 => Some(TypeAnnotation::typed(
                    "List",
                    vec![TypeAnnotation::generic("a")],
                )),
                2 => members[0]
                    .annotation_type()
                    .map(|element| TypeAnnotation::typed("List", vec![element])),
                _ => None,
            },
            Expression::Parenthesized { inner, .. } => inner.annotation_type(),
            Expression::OperatorApplication { .. }
            | Expression::Lambda { .. }
            | Expression::IfBlock { .. } => None,
        }
    }

    /// The node's range, or the `{0, 0}` placeholder when unpositioned.
    pub fn range(&self) -> Range {
        self.current_range().unwrap_or_default()
    }

    /// Overwrite the node's range.
    pub fn set_range(&mut self, range: Range) {
        *self.range_slot() = Some(range);
    }

    /// Assign the indentation column this node renders at.
    ///
    /// For operator applications the column also propagates recursively
    /// into the left operand, so the left-recursive spine of a pipe chain
    /// inherits the base column; right operands indent relative to
    /// `4 + column` at write time instead.
    pub fn set_range_column(&mut self, column: u32) {
        let mut range = self.range();
        range.column = column;
        *self.range_slot() = Some(range);
        if let Expression::OperatorApplication { left, .. } = self {
            left.set_range_column(column);
        }
    }

    fn range_slot(&mut self) -> &mut Option<Range> {
        match self {
            Expression::OperatorApplication { range, .. }
            | Expression::FunctionOrValue { range, .. }
            | Expression::Int { range, .. }
            | Expression::Literal { range, .. }
            | Expression::List { range, .. }
            | Expression::Application { range, .. }
            | Expression::Parenthesized { range, .. }
            | Expression::Lambda { range, .. }
            | Expression::IfBlock { range, .. } => range,
        }
    }

    fn current_range(&self) -> Option<Range> {
        match self {
            Expression::OperatorApplication { range, .. }
            | Expression::FunctionOrValue { range, .. }
            | Expression::Int { range, .. }
            | Expression::Literal { range, .. }
            | Expression::List { range, .. }
            | Expression::Application { range, .. }
            | Expression::Parenthesized { range, .. }
            | Expression::Lambda { range, .. }
            | Expression::IfBlock { range, .. } => *range,
        }
    }
}

/// An unqualified reference to a function or value.
pub fn value(
    name: impl Into<String>,
    range: Option<Range>,
    annotation: Option<TypeAnnotation>,
) -> Expression {
    Expression::FunctionOrValue {
        qualifier: Vec::new(),
        name: name.into(),
        annotation,
        range,
    }
}

/// A module-qualified reference: `value_in(&["Json", "Decode"], "succeed", ..)`
/// renders as `Json.Decode.succeed`.
pub fn value_in(
    qualifier: &[&str],
    name: impl Into<String>,
    range: Option<Range>,
    annotation: Option<TypeAnnotation>,
) -> Expression {
    Expression::FunctionOrValue {
        qualifier: qualifier.iter().map(|s| (*s).to_owned()).collect(),
        name: name.into(),
        annotation,
        range,
    }
}

/// Apply a function to arguments.
///
/// The resulting node's annotation is taken from the function position
/// only.
pub fn apply(function: Expression, arguments: Vec<Expression>, range: Option<Range>) -> Expression {
    let annotation = function.annotation_type();
    let mut expressions = Vec::with_capacity(arguments.len() + 1);
    expressions.push(function);
    expressions.extend(arguments);
    Expression::Application {
        expressions,
        annotation,
        range,
    }
}

/// A list literal.
pub fn list(members: Vec<Expression>) -> Expression {
    Expression::List {
        members,
        range: None,
    }
}

/// A string literal; its annotation is always `String`.
pub fn literal(value: impl Into<String>) -> Expression {
    Expression::Literal {
        value: value.into(),
        range: None,
    }
}

/// An integer literal; its annotation is always `Int`.
pub fn int(value: i64) -> Expression {
    Expression::Int { value, range: None }
}

/// An explicitly parenthesized expression.
pub fn parenthesized(inner: Expression) -> Expression {
    Expression::Parenthesized {
        inner: Box::new(inner),
        range: None,
    }
}

/// An anonymous function.
pub fn lambda(args: &[&str], body: Expression) -> Expression {
    Expression::Lambda {
        args: args.iter().map(|s| (*s).to_owned()).collect(),
        body: Box::new(body),
        range: None,
    }
}

/// A conditional expression.
pub fn if_block(
    condition: Expression,
    then_branch: Expression,
    else_branch: Expression,
) -> Expression {
    Expression::IfBlock {
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
        range: None,
    }
}
