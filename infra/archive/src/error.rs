use std::borrow::Cow;

/// A specialized [`ArchiveError`] enum of this crate.
#[forge_derive::forge_error]
pub enum ArchiveError {
    #[error("ZIP encoding failure{}: {source}", format_context(.context))]
    Zip { source: zip::result::ZipError, context: Option<Cow<'static, str>> },

    #[error("Hardware I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Write budget of {budget_ms} ms exceeded{}", format_context(.context))]
    Timeout { budget_ms: u128, context: Option<Cow<'static, str>> },

    #[error("Invalid archive target{}: {message}", format_context(.context))]
    InvalidTarget { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal archive error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
