mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{MembersParams, RenderParams, parse_log_level};
