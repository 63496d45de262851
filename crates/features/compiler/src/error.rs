use std::borrow::Cow;

/// Internal generation faults. Never shown to the caller; see [`crate::CompilationResult::Failed`].
#[forge_derive::forge_error]
pub enum CompileError {
    #[error("File set rejected a generated file{}: {source}", format_context(.context))]
    Files { source: forge_domain::DomainError, context: Option<Cow<'static, str>> },

    #[error("Program generation failed{}: {source}", format_context(.context))]
    Programs { source: forge_programs::ProgramError, context: Option<Cow<'static, str>> },

    #[error("Packaging failed{}: {source}", format_context(.context))]
    Archive { source: forge_archive::ArchiveError, context: Option<Cow<'static, str>> },

    #[error("Internal compiler error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
