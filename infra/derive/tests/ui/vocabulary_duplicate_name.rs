#![allow(dead_code)]

use flagpole_flags::FlagVocabulary;

#[derive(FlagVocabulary)]
enum Toggle {
    Alpha,
    #[flag(name = "Alpha")]
    Beta,
}

fn main() {}
