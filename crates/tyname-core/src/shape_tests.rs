use crate::{Primitive, TypeKind, TypeName, TypeShape};

#[test]
fn deserialize_nested_generic() {
    let json = r#"{
        "kind": "generic",
        "name": { "simple": "Dictionary`2", "full": "System.Collections.Generic.Dictionary`2" },
        "args": [
            { "kind": "primitive", "name": "string" },
            { "kind": "nullable_value", "inner": { "kind": "primitive", "name": "Int32" } }
        ]
    }"#;
    let shape: TypeShape = serde_json::from_str(json).unwrap();

    assert_eq!(
        shape,
        TypeShape::generic(
            "Dictionary`2",
            "System.Collections.Generic.Dictionary`2",
            [
                Primitive::String.into(),
                TypeShape::nullable(Primitive::Int32.into()),
            ]
        )
    );
}

#[test]
fn array_rank_defaults_to_one() {
    let shape: TypeShape =
        serde_json::from_str(r#"{ "kind": "array", "element": { "kind": "primitive", "name": "int" } }"#)
            .unwrap();

    assert_eq!(shape, TypeShape::array(Primitive::Int32.into()));
}

#[test]
fn bare_string_name_has_no_full_name() {
    let shape: TypeShape = serde_json::from_str(r#"{ "kind": "named", "name": "Widget" }"#).unwrap();

    assert_eq!(shape, TypeName::simple("Widget").into());
}

#[test]
fn full_only_name_derives_simple_name() {
    let shape: TypeShape = serde_json::from_str(
        r#"{ "kind": "named", "name": { "full": "System.DateTime", "kind": "value" } }"#,
    )
    .unwrap();

    let TypeShape::Named { name } = shape else {
        panic!("expected named shape");
    };
    assert_eq!(name.simple, "DateTime");
    assert_eq!(name.full.as_deref(), Some("System.DateTime"));
    assert_eq!(name.kind, TypeKind::Value);
}

#[test]
fn name_without_spelling_is_rejected() {
    let result = serde_json::from_str::<TypeShape>(r#"{ "kind": "named", "name": {} }"#);
    assert!(result.is_err());
}

#[test]
fn full_or_simple_falls_back() {
    assert_eq!(TypeName::simple("T").full_or_simple(), "T");
    assert_eq!(TypeName::new("Guid", "System.Guid").full_or_simple(), "System.Guid");
}

#[test]
fn value_type_classification() {
    assert!(TypeShape::from(Primitive::Int32).is_value_type());
    assert!(!TypeShape::from(Primitive::String).is_value_type());
    assert!(TypeShape::nullable(Primitive::Int32.into()).is_value_type());
    assert!(!TypeShape::array(Primitive::Int32.into()).is_value_type());
    assert!(TypeShape::from(TypeName::new("DateTime", "System.DateTime").value_type()).is_value_type());
    assert!(!TypeShape::named("Uri", "System.Uri").is_value_type());
}

#[test]
fn node_count_walks_all_children() {
    let shape = TypeShape::array(TypeShape::generic(
        "List`1",
        "System.Collections.Generic.List`1",
        [TypeShape::nullable(Primitive::Int32.into())],
    ));

    assert_eq!(shape.node_count(), 4);
}

#[test]
fn serialize_skips_defaults() {
    let json = serde_json::to_string(&TypeShape::from(TypeName::simple("Widget"))).unwrap();
    assert_eq!(json, r#"{"kind":"named","name":{"simple":"Widget"}}"#);
}
