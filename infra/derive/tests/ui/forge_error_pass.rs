use forge_derive::forge_error;
use std::borrow::Cow;

#[forge_error]
pub enum PackError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Path conflict: {path}")]
    PathConflict { path: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: PackError = "boom".into();
    assert_eq!(err.kind(), "internal");
}
