//! Idempotence verification.
//!
//! `Writer::write` is pure: rendering the same tree twice must yield
//! byte-identical output, and rendering never mutates the tree. These
//! tests pin that down on a representative module tree rather than a
//! trivial leaf.

use elmgen_fmt::{write_declaration, write_declarations};
use elmgen_ir::{
    apply, literal, pipes, value, value_in, Annotation, Declaration, Range, Signature,
    TypeAnnotation, Variant,
};
use pretty_assertions::assert_eq;

/// Build the declarations a flag-derived module would contain.
fn sample_module() -> Vec<Declaration> {
    let model = Annotation::record(vec![
        ("title", Annotation::string()),
        ("count", Annotation::maybe(Annotation::int())),
    ]);
    let alias = Declaration::alias("model", model);

    let message = Declaration::custom_type(
        "msg",
        vec![
            Variant::new("gotTitle", vec![Annotation::string()]),
            Variant::new("noOp", Vec::new()),
        ],
    );

    let mut stage = apply(
        value("required", None, None),
        vec![
            literal("title"),
            value_in(&["Decode"], "string", None, None),
        ],
        None,
    );
    stage.set_range(Range::new(1, 0));
    let body = pipes(
        apply(
            value_in(&["Decode"], "succeed", None, None),
            vec![value("Model", None, None)],
            None,
        ),
        vec![stage],
    );
    let decoder = Declaration::function(
        "decoder",
        body,
        Signature::new(
            "decoder",
            TypeAnnotation::typed(
                "Decode.Decoder",
                vec![TypeAnnotation::typed("Model", Vec::new())],
            ),
        ),
    );

    vec![alias, message, decoder]
}

#[test]
fn writing_twice_is_byte_identical() {
    for declaration in sample_module() {
        let writer = write_declaration(&declaration)
            .unwrap_or_else(|error| panic!("render failed: {error}"));
        assert_eq!(writer.write(), writer.write());
    }
}

#[test]
fn writing_does_not_mutate_the_writer_tree() {
    let declarations = sample_module();
    let writer = write_declaration(&declarations[0])
        .unwrap_or_else(|error| panic!("render failed: {error}"));
    let before = writer.clone();
    let _ = writer.write();
    assert_eq!(writer, before);
}

#[test]
fn module_rendering_is_stable_across_calls() {
    let declarations = sample_module();
    let first = write_declarations(&declarations);
    let second = write_declarations(&declarations);
    assert_eq!(first, second);
}

#[test]
fn rebuilding_the_tree_reproduces_the_output() {
    let first = write_declarations(&sample_module());
    let second = write_declarations(&sample_module());
    assert_eq!(first, second);
}
