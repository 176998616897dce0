use std::path::PathBuf;

use tracing::debug;
use tyname_lib::{RenderOptions, Renderer, ShapeDocument};

use super::input::load_input;
use super::{CommandError, finish};

pub struct RenderArgs {
    pub shape_path: Option<PathBuf>,
    pub shape_text: Option<String>,
    pub options: RenderOptions,
}

pub fn run(args: RenderArgs) {
    finish(execute(&args));
}

pub fn execute(args: &RenderArgs) -> Result<String, CommandError> {
    let src = load_input(
        args.shape_path.as_deref(),
        args.shape_text.as_deref(),
        "shape document",
    )?;
    let doc = ShapeDocument::from_json(&src)?;

    debug!(
        nodes = doc.ty.node_count(),
        annotated = doc.nullability.is_some(),
        "rendering shape"
    );

    Ok(Renderer::new(args.options).render(&doc.ty, doc.nullability.as_ref()))
}
