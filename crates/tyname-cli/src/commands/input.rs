use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{path}': {source}")]
    File { path: String, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),
    #[error("{what} is required: use a file argument, inline text, or \"-\" for stdin")]
    Missing { what: &'static str },
    #[error("{what} cannot be empty")]
    Empty { what: &'static str },
}

/// Load JSON input from inline text, a file, or stdin (`-`).
pub fn load_input(
    path: Option<&Path>,
    text: Option<&str>,
    what: &'static str,
) -> Result<String, InputError> {
    let content = match (text, path) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) if path.as_os_str() == "-" => load_stdin()?,
        (None, Some(path)) => load_file(path)?,
        (None, None) => return Err(InputError::Missing { what }),
    };

    if content.trim().is_empty() {
        return Err(InputError::Empty { what });
    }
    Ok(content)
}

fn load_stdin() -> Result<String, InputError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::File {
        path: path.display().to_string(),
        source,
    })
}
