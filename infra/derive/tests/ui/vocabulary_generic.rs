#![allow(dead_code)]

use flagpole_flags::FlagVocabulary;

#[derive(FlagVocabulary)]
enum Toggle<T> { Alpha(T) }

fn main() {}
