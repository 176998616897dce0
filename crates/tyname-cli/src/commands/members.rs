use std::path::PathBuf;

use tracing::debug;
use tyname_lib::{Catalog, Member, RenderOptions};

use super::input::load_input;
use super::{CommandError, finish};

pub struct MembersArgs {
    pub catalog_path: PathBuf,
    pub type_name: String,
    pub member_name: Option<String>,
    pub options: RenderOptions,
}

pub fn run(args: MembersArgs) {
    finish(execute(&args));
}

/// One `name: type` line per selected member, in declaration order.
pub fn execute(args: &MembersArgs) -> Result<String, CommandError> {
    let src = load_input(Some(&args.catalog_path), None, "catalog")?;
    let catalog = Catalog::from_json(&src)?;
    let ty = catalog.find_type(&args.type_name)?;

    let members: Vec<Member> = match &args.member_name {
        Some(name) => vec![ty.member(name)?],
        None => ty.members().collect(),
    };
    debug!(ty = %ty.name, count = members.len(), "listing members");

    let lines = members
        .iter()
        .map(|m| Ok(format!("{}: {}", m.name(), m.readable_type(&args.options)?)))
        .collect::<Result<Vec<_>, tyname_lib::Error>>()?;
    Ok(lines.join("\n"))
}
