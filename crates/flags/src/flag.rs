use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A closed, build-time vocabulary of boolean flags.
///
/// Implemented by `#[derive(FlagVocabulary)]`; hand-written impls must keep `name` a
/// bijection over [`Flag::VOCABULARY`].
pub trait Flag: Copy + Eq + Hash + Ord + Debug + Display + Send + Sync + 'static {
    /// Every identifier, in declaration order.
    const VOCABULARY: &'static [Self];

    /// The flag that, while enabled, suppresses unknown-name errors. `None` means always strict.
    const ALLOW_UNRECOGNIZED: Option<Self>;

    /// Canonical name used for string-keyed access.
    fn name(self) -> &'static str;

    /// Value the flag holds right after initialization.
    fn default_value(self) -> bool;

    /// Inverse of [`Flag::name`].
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::VOCABULARY.iter().copied().find(|flag| flag.name() == name)
    }

    /// `(identifier, default)` pairs for the whole vocabulary.
    fn defaults() -> impl Iterator<Item = (Self, bool)> {
        Self::VOCABULARY.iter().map(|&flag| (flag, flag.default_value()))
    }
}
