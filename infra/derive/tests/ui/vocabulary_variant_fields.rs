#![allow(dead_code)]

use flagpole_flags::FlagVocabulary;

#[derive(FlagVocabulary)]
enum Toggle {
    Alpha,
    Beta(bool),
}

fn main() {}
