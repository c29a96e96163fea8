#![allow(dead_code)]

use flagpole_flags::FlagVocabulary;

#[derive(FlagVocabulary)]
enum Toggle {
    #[flag(allow_unrecognized)]
    Lenient,
    #[flag(allow_unrecognized)]
    Relaxed,
}

fn main() {}
