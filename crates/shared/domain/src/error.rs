use std::borrow::Cow;

/// Errors raised by domain containers.
#[forge_derive::forge_error]
pub enum DomainError {
    /// A generated path is not a clean relative archive path.
    #[error("Invalid file path '{path}'{}: {reason}", format_context(.context))]
    InvalidPath { path: String, reason: &'static str, context: Option<Cow<'static, str>> },

    /// Two generators produced different content for the same path.
    #[error("Conflicting content for '{path}'{}", format_context(.context))]
    PathConflict { path: String, context: Option<Cow<'static, str>> },

    #[error("Internal domain error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
