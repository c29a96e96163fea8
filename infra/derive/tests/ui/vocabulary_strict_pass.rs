use flagpole_flags::{Flag, FlagVocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FlagVocabulary)]
enum Strict {
    Only,
}

fn main() {
    assert_eq!(Strict::ALLOW_UNRECOGNIZED, None);
    assert_eq!(Strict::VOCABULARY, &[Strict::Only]);
}
