use std::borrow::Cow;

#[forge_derive::forge_error]
pub enum ProgramError {
    /// Program sources were requested for a project without a token.
    #[error("Token is not enabled{}", format_context(.context))]
    TokenDisabled { context: Option<Cow<'static, str>> },

    /// The symbol cannot name an Anchor crate.
    #[error("Symbol '{symbol}' cannot name a program crate{}", format_context(.context))]
    InvalidSymbol { symbol: String, context: Option<Cow<'static, str>> },

    /// Token decimals outside what a mint can carry.
    #[error("Token decimals {decimals} exceed {max}{}", format_context(.context))]
    InvalidDecimals { decimals: u32, max: u32, context: Option<Cow<'static, str>> },

    /// A template references a placeholder that was not supplied.
    #[error("Template placeholder '{name}' has no value{}", format_context(.context))]
    MissingPlaceholder { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal program generator error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
