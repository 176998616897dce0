use indoc::indoc;
use tyname_core::{NullabilityTree, Primitive, TypeShape};

use crate::{Catalog, Error, MemberKind, RenderOptions, ShapeDocument};

const FIXTURES: &str = indoc! {r#"
    {
      "types": [
        {
          "name": "NullablePropertiesClass",
          "full_name": "Demo.TestFixtures+NullablePropertiesClass",
          "nullable_context": 1,
          "members": [
            { "kind": "property", "name": "NonNullableString",
              "type": { "kind": "primitive", "name": "string" } },
            { "kind": "property", "name": "NullableString",
              "type": { "kind": "primitive", "name": "string" }, "nullable": [2] },
            { "kind": "property", "name": "NullableInt",
              "type": { "kind": "nullable_value", "inner": { "kind": "primitive", "name": "int" } } },
            { "kind": "property", "name": "NullableList",
              "type": { "kind": "generic",
                        "name": { "simple": "List`1", "full": "System.Collections.Generic.List`1" },
                        "args": [{ "kind": "primitive", "name": "string" }] },
              "nullable": [2, 1] },
            { "kind": "property", "name": "ListOfNullableString",
              "type": { "kind": "generic",
                        "name": { "simple": "List`1", "full": "System.Collections.Generic.List`1" },
                        "args": [{ "kind": "primitive", "name": "string" }] },
              "nullable": [1, 2] },
            { "kind": "property", "name": "NullableListOfNullableInt",
              "type": { "kind": "generic",
                        "name": { "simple": "List`1", "full": "System.Collections.Generic.List`1" },
                        "args": [{ "kind": "nullable_value",
                                   "inner": { "kind": "primitive", "name": "int" } }] },
              "nullable": [2] }
          ]
        },
        {
          "name": "EventsClass",
          "members": [
            { "kind": "event", "name": "StandardEvent",
              "type": { "kind": "named",
                        "name": { "simple": "EventHandler", "full": "System.EventHandler" } },
              "nullability": { "state": "nullable" } },
            { "kind": "event", "name": "Broken" }
          ]
        }
      ]
    }
"#};

fn catalog() -> Catalog {
    Catalog::from_json(FIXTURES).unwrap()
}

#[test]
fn lists_members_in_order() {
    let catalog = catalog();
    let ty = catalog.find_type("NullablePropertiesClass").unwrap();
    let options = RenderOptions::default();

    let listing = ty
        .members()
        .map(|m| format!("{}: {}", m.name(), m.readable_type(&options).unwrap()))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r"
    NonNullableString: string
    NullableString: string?
    NullableInt: int?
    NullableList: List<string>?
    ListOfNullableString: List<string?>
    NullableListOfNullableInt: List<int?>?
    ");
}

#[test]
fn finds_types_by_full_name() {
    let catalog = catalog();
    let ty = catalog
        .find_type("Demo.TestFixtures+NullablePropertiesClass")
        .unwrap();

    assert_eq!(ty.name, "NullablePropertiesClass");
    assert_eq!(catalog.types().len(), 2);
}

#[test]
fn declaring_type_renders_short_or_full() {
    let catalog = catalog();
    let shape = catalog.find_type("NullablePropertiesClass").unwrap().shape();
    let renderer = |full| crate::Renderer::new(RenderOptions::new().full_names(full));

    assert_eq!(renderer(false).render(&shape, None), "NullablePropertiesClass");
    assert_eq!(
        renderer(true).render(&shape, None),
        "Demo.TestFixtures+NullablePropertiesClass"
    );
}

#[test]
fn explicit_tree_wins() {
    let catalog = catalog();
    let member = catalog
        .find_type("EventsClass")
        .unwrap()
        .member("StandardEvent")
        .unwrap();

    assert_eq!(member.kind(), MemberKind::Event);
    assert_eq!(member.nullability(), Some(&NullabilityTree::nullable()));
    assert_eq!(
        member.readable_type(&RenderOptions::new().full_names(true)).unwrap(),
        "System.EventHandler?"
    );
}

#[test]
fn event_without_type_reports_missing_handler() {
    let catalog = catalog();
    let member = catalog.find_type("EventsClass").unwrap().member("Broken").unwrap();

    assert_eq!(member.nullability(), None);
    assert_eq!(
        member.readable_type(&RenderOptions::default()),
        Err(Error::MissingHandlerType("Broken".to_string()))
    );
}

#[test]
fn unknown_names() {
    let catalog = catalog();

    assert_eq!(
        catalog.find_type("Missing").unwrap_err(),
        Error::UnknownType("Missing".to_string())
    );
    assert_eq!(
        catalog
            .find_type("EventsClass")
            .unwrap()
            .member("Nope")
            .unwrap_err(),
        Error::UnknownMember {
            ty: "EventsClass".to_string(),
            member: "Nope".to_string(),
        }
    );
}

#[test]
fn malformed_catalog_reports_path() {
    let src = indoc! {r#"
        { "types": [ { "name": "A", "members": [ { "kind": "method", "name": "Run" } ] } ] }
    "#};
    let err = Catalog::from_json(src).unwrap_err();

    let Error::Metadata { path, .. } = err else {
        panic!("expected metadata error, got {err:?}");
    };
    assert_eq!(path, "types[0].members[0].kind");
}

#[test]
fn shape_document_with_nullability() {
    let doc = ShapeDocument::from_json(indoc! {r#"
        {
          "type": { "kind": "array", "element": { "kind": "primitive", "name": "string" } },
          "nullability": { "state": "not_nullable", "element": { "state": "nullable" } }
        }
    "#})
    .unwrap();

    assert_eq!(doc.ty, TypeShape::array(Primitive::String.into()));
    assert_eq!(
        doc.nullability,
        Some(NullabilityTree::not_nullable().with_element(NullabilityTree::nullable()))
    );
}

#[test]
fn bare_shape_document() {
    let doc = ShapeDocument::from_json(r#"{ "kind": "primitive", "name": "Int32" }"#).unwrap();

    assert_eq!(doc.ty, TypeShape::from(Primitive::Int32));
    assert_eq!(doc.nullability, None);
}

#[test]
fn malformed_shape_document() {
    let err = ShapeDocument::from_json(r#"{ "type": { "kind": "tuple" } }"#).unwrap_err();
    assert!(matches!(err, Error::Metadata { .. }), "{err:?}");
}
