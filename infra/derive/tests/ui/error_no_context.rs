use flagpole_derive::flagpole_error;

#[flagpole_error]
pub enum DemoError {
    #[error("IO error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
