#![allow(dead_code)]

use flagpole_flags::FlagVocabulary;

#[derive(FlagVocabulary)]
struct Toggle;

fn main() {}
