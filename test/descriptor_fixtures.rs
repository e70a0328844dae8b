//! Descriptor snapshots round-tripped through JSON.
//!
//! A frontend running in another process hands symbol-table snapshots over
//! as JSON; these tests pin the wire shape and check that deserialized
//! descriptors classify the same as ones built in-process.

use range_codegen::{builtins, calls, classify, Callable, ElementKind, RangeFamily, TypeRef};

#[test]
fn test_type_snapshot_classifies_after_deserialization() {
    let snapshot = r#"
        {
            "declaration": {
                "name": "IntRange",
                "container": { "Package": "kotlin.ranges" },
                "kind": "Class"
            }
        }
    "#;
    let ty: TypeRef = serde_json::from_str(snapshot).unwrap();
    assert_eq!(
        classify(&ty),
        Some(RangeFamily::PrimitiveRange(ElementKind::Int))
    );
}

#[test]
fn test_callable_snapshot_with_primitive_kinds() {
    let snapshot = r#"
        {
            "name": "rangeTo",
            "owner": { "Package": "kotlin.ranges" },
            "extension_receiver": {
                "declaration": {
                    "name": "Int",
                    "container": { "Package": "kotlin" },
                    "kind": { "Primitive": "Int" }
                }
            },
            "value_parameters": [
                {
                    "declaration": {
                        "name": "Int",
                        "container": { "Package": "kotlin" },
                        "kind": { "Primitive": "Int" }
                    }
                }
            ],
            "return_type": {
                "declaration": {
                    "name": "IntRange",
                    "container": { "Package": "kotlin.ranges" },
                    "kind": "Class"
                }
            }
        }
    "#;
    let callable: Callable = serde_json::from_str(snapshot).unwrap();
    assert!(calls::is_primitive_number_range_to(&callable));
    assert_eq!(callable.extension_receiver, Some(builtins::int_type()));
}

#[test]
fn test_nullable_flag_survives_the_round_trip() {
    let ty = TypeRef::of(range_codegen::Declaration::class(
        "IntRange",
        builtins::RANGES_PACKAGE,
    ))
    .as_nullable();

    let json = serde_json::to_string(&ty).unwrap();
    let back: TypeRef = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ty);
    assert_eq!(classify(&back), None);
}

#[test]
fn test_member_callable_round_trip() {
    let original = Callable::member(
        range_codegen::Declaration::interface("ClosedRange", builtins::RANGES_PACKAGE),
        "contains",
    )
    .with_parameters(vec![builtins::int_type()]);

    let json = serde_json::to_string(&original).unwrap();
    let back: Callable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
    assert!(calls::is_closed_range_contains(&back));
}
