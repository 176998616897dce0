//! Errors surfaced by the binding and metadata layers.
//!
//! The renderer itself never fails; everything here is raised before a
//! render starts.

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required input (type shape or member type) was absent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An event member has no handler type to render.
    #[error("event `{0}` must have a handler type")]
    MissingHandlerType(String),

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("type `{ty}` has no member `{member}`")]
    UnknownMember { ty: String, member: String },

    /// Metadata JSON did not match the expected layout.
    #[error("malformed metadata at {path}: {message}")]
    Metadata { path: String, message: String },
}
