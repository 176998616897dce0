pub mod input;
pub mod members;
pub mod render;

#[cfg(test)]
mod members_tests;

use input::InputError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Lib(#[from] tyname_lib::Error),
}

/// Print a command's output, or its error and exit with status 1.
pub(crate) fn finish(result: Result<String, CommandError>) {
    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
