//! Dispatch logic: extract params from `ArgMatches` and convert them to
//! command args.

use std::path::PathBuf;

use clap::ArgMatches;
use tyname_lib::RenderOptions;

use crate::commands::members::MembersArgs;
use crate::commands::render::RenderArgs;
use crate::logging::LogLevel;

pub struct RenderParams {
    pub shape_path: Option<PathBuf>,
    pub shape_text: Option<String>,
    pub full_names: bool,
    pub no_aliases: bool,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            shape_path: m.get_one::<PathBuf>("shape_path").cloned(),
            shape_text: m.get_one::<String>("shape_text").cloned(),
            full_names: m.get_flag("full_names"),
            no_aliases: m.get_flag("no_aliases"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            shape_path: p.shape_path,
            shape_text: p.shape_text,
            options: render_options(p.full_names, p.no_aliases),
        }
    }
}

pub struct MembersParams {
    pub catalog_path: PathBuf,
    pub type_name: String,
    pub member_name: Option<String>,
    pub full_names: bool,
    pub no_aliases: bool,
}

impl MembersParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            catalog_path: m
                .get_one::<PathBuf>("catalog_path")
                .cloned()
                .unwrap_or_default(),
            type_name: m.get_one::<String>("type_name").cloned().unwrap_or_default(),
            member_name: m.get_one::<String>("member_name").cloned(),
            full_names: m.get_flag("full_names"),
            no_aliases: m.get_flag("no_aliases"),
        }
    }
}

impl From<MembersParams> for MembersArgs {
    fn from(p: MembersParams) -> Self {
        Self {
            catalog_path: p.catalog_path,
            type_name: p.type_name,
            member_name: p.member_name,
            options: render_options(p.full_names, p.no_aliases),
        }
    }
}

/// Log level given on the command line, if any.
pub fn parse_log_level(m: &ArgMatches) -> Option<LogLevel> {
    m.get_one::<LogLevel>("log_level").copied()
}

fn render_options(full_names: bool, no_aliases: bool) -> RenderOptions {
    RenderOptions::new()
        .full_names(full_names)
        .alias_names(!no_aliases)
}
