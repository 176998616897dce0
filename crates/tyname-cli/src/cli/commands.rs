//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tyname")
        .about("Render .NET type shapes as C# type names")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_level_arg())
        .subcommand(render_command())
        .subcommand(members_command())
}

/// Render one shape document.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render a type shape")
        .override_usage(
            "\
  tyname render <FILE>
  tyname render -
  tyname render -e <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  tyname render shape.json
  tyname render -e '{"kind":"primitive","name":"Int32"}'
  tyname render -e '{"kind":"primitive","name":"Int32"}' --no-aliases
  cat shape.json | tyname render - --full-names"#,
        )
        .arg(shape_path_arg())
        .arg(shape_text_arg())
        .arg(full_names_arg())
        .arg(no_aliases_arg())
}

/// List member types of a declaring type in a catalog.
pub fn members_command() -> Command {
    Command::new("members")
        .about("Print readable member types from a catalog")
        .after_help(
            r#"EXAMPLES:
  tyname members catalog.json --type Widget
  tyname members catalog.json --type Demo.Widget --member Tags
  tyname members catalog.json -t Widget --full-names"#,
        )
        .arg(catalog_path_arg())
        .arg(type_name_arg())
        .arg(member_name_arg())
        .arg(full_names_arg())
        .arg(no_aliases_arg())
}
