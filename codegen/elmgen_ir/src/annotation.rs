//! Type annotations and the alias registry.
//!
//! An [`Annotation`] pairs a type shape with the set of named aliases the
//! shape transitively introduced. The registry rides alongside the shape
//! rather than inside it: two annotations may carry equal alias entries
//! without any parent/child relationship. Composition unions registries,
//! with later entries winning on key collision.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Alias registry: alias name (already capitalized) to the aliased shape.
///
/// Insertion-ordered so emitted alias declarations are deterministic.
pub type AliasMap = IndexMap<String, TypeAnnotation, FxBuildHasher>;

/// A type shape in the generated subset of Elm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeAnnotation {
    /// A named type applied to zero or more arguments:
    /// `String`, `Maybe String`, `List (Maybe Int)`.
    Typed {
        name: String,
        args: Vec<TypeAnnotation>,
    },
    /// A type variable: `a`.
    Generic(String),
    /// A structural record type; field order is significant and preserved.
    Record(Vec<Field>),
}

/// One field of a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub annotation: Annotation,
}

impl TypeAnnotation {
    /// A named type applied to argument shapes.
    pub fn typed(name: impl Into<String>, args: Vec<TypeAnnotation>) -> Self {
        TypeAnnotation::Typed {
            name: name.into(),
            args,
        }
    }

    /// A type variable.
    pub fn generic(name: impl Into<String>) -> Self {
        TypeAnnotation::Generic(name.into())
    }
}

/// A type shape together with every alias introduced in the subtree that
/// produced it.
///
/// The alias registry is not serialized inline when the shape is rendered;
/// callers emit its entries as separate top-level declarations (see
/// `alias_declarations`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub annotation: TypeAnnotation,
    pub aliases: AliasMap,
}

impl Annotation {
    fn primitive(name: &str) -> Self {
        Annotation {
            annotation: TypeAnnotation::typed(name, Vec::new()),
            aliases: AliasMap::default(),
        }
    }

    /// The `String` primitive.
    pub fn string() -> Self {
        Self::primitive("String")
    }

    /// The `Int` primitive.
    pub fn int() -> Self {
        Self::primitive("Int")
    }

    /// The `Float` primitive.
    pub fn float() -> Self {
        Self::primitive("Float")
    }

    /// The `Bool` primitive.
    pub fn bool() -> Self {
        Self::primitive("Bool")
    }

    /// The unit type `()`.
    pub fn unit() -> Self {
        Self::primitive("()")
    }

    /// A named type applied to argument annotations, for shapes the sugar
    /// constructors do not cover. Unions the arguments' alias registries
    /// left to right.
    pub fn typed(name: impl Into<String>, args: Vec<Annotation>) -> Self {
        let mut aliases = AliasMap::default();
        let mut shapes = Vec::with_capacity(args.len());
        for arg in args {
            merge_aliases(&mut aliases, &arg.aliases);
            shapes.push(arg.annotation);
        }
        Annotation {
            annotation: TypeAnnotation::typed(name, shapes),
            aliases,
        }
    }

    /// Wrap a shape in `Maybe`, forwarding its alias registry unchanged.
    pub fn maybe(inner: Annotation) -> Self {
        Annotation {
            annotation: TypeAnnotation::Typed {
                name: "Maybe".to_owned(),
                args: vec![inner.annotation],
            },
            aliases: inner.aliases,
        }
    }

    /// Wrap a shape in `List`, forwarding its alias registry unchanged.
    pub fn list(inner: Annotation) -> Self {
        Annotation {
            annotation: TypeAnnotation::Typed {
                name: "List".to_owned(),
                args: vec![inner.annotation],
            },
            aliases: inner.aliases,
        }
    }

    /// Register `target`'s shape under the capitalized alias name and
    /// return the alias as a bare named type.
    ///
    /// Only the immediate binding survives: the target's own registry is
    /// dropped, so nested aliases must be separately threaded by the
    /// caller. Downstream deduplication relies on aliases being
    /// re-declared at each alias boundary rather than transitively
    /// flattened.
    pub fn alias(name: &str, target: Annotation) -> Self {
        let name = capitalize(name);
        let mut aliases = AliasMap::default();
        aliases.insert(name.clone(), target.annotation);
        Annotation {
            annotation: TypeAnnotation::typed(name, Vec::new()),
            aliases,
        }
    }

    /// A record shape from named fields, unioning every field's alias
    /// registry left to right (later duplicate keys win).
    pub fn record(fields: Vec<(impl Into<String>, Annotation)>) -> Self {
        let mut aliases = AliasMap::default();
        let fields: Vec<Field> = fields
            .into_iter()
            .map(|(name, annotation)| {
                merge_aliases(&mut aliases, &annotation.aliases);
                Field {
                    name: name.into(),
                    annotation,
                }
            })
            .collect();
        Annotation {
            annotation: TypeAnnotation::Record(fields),
            aliases,
        }
    }
}

/// Union `from` into `into`; entries from `from` win on key collision.
pub(crate) fn merge_aliases(into: &mut AliasMap, from: &AliasMap) {
    for (name, shape) in from {
        into.insert(name.clone(), shape.clone());
    }
}

/// Uppercase the first character of `name`.
///
/// This is the sole name-mangling rule in the system and is applied
/// exactly once per alias, declaration, or variant introduction.
///
/// # Panics
///
/// Panics on an empty name; that is a caller contract violation.
pub fn capitalize(name: &str) -> String {
    match name.chars().next() {
        None => panic!("can't capitalize an empty name"),
        Some(first) => {
            let rest = &name[first.len_utf8()..];
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(rest);
            capitalized
        }
    }
}
