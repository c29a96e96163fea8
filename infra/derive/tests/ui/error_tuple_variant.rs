use flagpole_derive::flagpole_error;

#[flagpole_error]
pub enum DemoError {
    Io(std::io::Error),
}

fn main() {}
