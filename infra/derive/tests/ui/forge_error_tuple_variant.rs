use forge_derive::forge_error;

#[forge_error]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(std::io::Error),
}

fn main() {}
