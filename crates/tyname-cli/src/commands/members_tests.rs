use std::path::PathBuf;

use tyname_lib::RenderOptions;

use super::CommandError;
use super::members::{MembersArgs, execute};

fn fixture() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/widgets.json"))
}

fn args(type_name: &str, member_name: Option<&str>, options: RenderOptions) -> MembersArgs {
    MembersArgs {
        catalog_path: fixture(),
        type_name: type_name.to_string(),
        member_name: member_name.map(str::to_string),
        options,
    }
}

#[test]
fn lists_all_members() {
    let output = execute(&args("Widget", None, RenderOptions::default())).unwrap();

    insta::assert_snapshot!(output, @r"
    Name: string
    Tags: List<string>?
    Counts: int[,]
    Changed: EventHandler?
    ");
}

#[test]
fn single_member_with_full_names() {
    let options = RenderOptions::new().full_names(true).alias_names(false);
    let output = execute(&args("Demo.Widget", Some("Tags"), options)).unwrap();

    assert_eq!(output, "Tags: System.Collections.Generic.List<System.String>?");
}

#[test]
fn unknown_member() {
    let err = execute(&args("Widget", Some("Size"), RenderOptions::default())).unwrap_err();
    assert_eq!(err.to_string(), "type `Widget` has no member `Size`");
}

#[test]
fn event_without_handler_fails_listing() {
    let err = execute(&args("Broken", None, RenderOptions::default())).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Lib(tyname_lib::Error::MissingHandlerType(ref name)) if name == "Orphan"
    ));
}

#[test]
fn missing_catalog_file() {
    let mut args = args("Widget", None, RenderOptions::default());
    args.catalog_path = PathBuf::from("does/not/exist.json");

    let err = execute(&args).unwrap_err();
    assert!(err.to_string().starts_with("failed to read 'does/not/exist.json'"), "{err}");
}
