use forge_derive::forge_error;

#[forge_error]
pub enum PackError {
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}

fn main() {}
