use flagpole_flags::{Flag, FlagVocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FlagVocabulary)]
pub enum Toggle {
    #[flag(name = "unused")]
    Unused,
    #[flag(default = true)]
    LegacyTls,
    #[flag(allow_unrecognized)]
    AllowUnrecognized,
}

fn main() {
    assert_eq!(Toggle::VOCABULARY.len(), 3);
    assert_eq!(Toggle::Unused.name(), "unused");
    assert_eq!(Toggle::LegacyTls.to_string(), "LegacyTls");
    assert!(Toggle::LegacyTls.default_value());
    assert!(!Toggle::AllowUnrecognized.default_value());
    assert_eq!(Toggle::ALLOW_UNRECOGNIZED, Some(Toggle::AllowUnrecognized));
    assert_eq!("unused".parse::<Toggle>().ok(), Some(Toggle::Unused));
    assert!("Unused".parse::<Toggle>().is_err());
}
