//! Top-level declarations.

use thiserror::Error;

use crate::annotation::{capitalize, AliasMap, Annotation, TypeAnnotation};
use crate::expr::Expression;

/// One constructor case of a custom type, with zero or more typed
/// payloads.
#[derive(Clone, Debug, PartialEq)]
pub struct Variant {
    pub name: String,
    pub annotations: Vec<Annotation>,
}

impl Variant {
    /// Build a variant, capitalizing the constructor name.
    pub fn new(name: &str, annotations: Vec<Annotation>) -> Self {
        Variant {
            name: capitalize(name),
            annotations,
        }
    }
}

/// A function's type signature line: `name : annotation`.
#[derive(Clone, Debug, PartialEq)]
pub struct Signature {
    pub name: String,
    pub type_annotation: TypeAnnotation,
}

impl Signature {
    pub fn new(name: impl Into<String>, type_annotation: TypeAnnotation) -> Self {
        Signature {
            name: name.into(),
            type_annotation,
        }
    }
}

/// A top-level declaration in a generated module.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    /// `type alias Name = ...`
    Alias {
        name: String,
        annotation: Annotation,
    },
    /// `type Name = A | B ...`
    CustomType {
        name: String,
        variants: Vec<Variant>,
    },
    /// A value declaration with its signature.
    Function {
        name: String,
        expression: Expression,
        signature: Signature,
    },
}

/// Error raised when a declaration has no name the alias-deduplication
/// passes can address.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("can't take the name of a function declaration")]
    UnnamedDeclaration,
}

impl Declaration {
    /// An alias declaration; the name is capitalized here, regardless of
    /// the input's case.
    pub fn alias(name: &str, annotation: Annotation) -> Self {
        Declaration::Alias {
            name: capitalize(name),
            annotation,
        }
    }

    /// A custom type declaration; the name is capitalized here.
    pub fn custom_type(name: &str, variants: Vec<Variant>) -> Self {
        Declaration::CustomType {
            name: capitalize(name),
            variants,
        }
    }

    /// A function declaration.
    ///
    /// Forces the body expression's indentation column to 4, Elm's
    /// standard body indent, before wrapping it.
    pub fn function(name: impl Into<String>, mut expression: Expression, signature: Signature) -> Self {
        expression.set_range_column(4);
        Declaration::Function {
            name: name.into(),
            expression,
            signature,
        }
    }

    /// The declaration's name, for alias/custom-type deduplication.
    ///
    /// Defined only for alias and custom-type declarations; function
    /// declarations are never addressed by name in the contexts that call
    /// this, so asking for one is an error.
    pub fn name(&self) -> Result<&str, DeclarationError> {
        match self {
            Declaration::Alias { name, .. } | Declaration::CustomType { name, .. } => Ok(name),
            Declaration::Function { .. } => Err(DeclarationError::UnnamedDeclaration),
        }
    }
}

/// Expand an alias registry into alias declarations, in insertion order.
///
/// Registry keys are already capitalized, so the declarations are built
/// directly rather than through [`Declaration::alias`]; the
/// capitalization rule is applied exactly once, at introduction.
pub fn alias_declarations(aliases: &AliasMap) -> Vec<Declaration> {
    aliases
        .iter()
        .map(|(name, shape)| Declaration::Alias {
            name: name.clone(),
            annotation: Annotation {
                annotation: shape.clone(),
                aliases: AliasMap::default(),
            },
        })
        .collect()
}
