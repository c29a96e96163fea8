use crate::{Flag, FlagError};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// Live values of a closed flag vocabulary.
///
/// The default snapshot and the name lookup table are built once in [`Registry::new`] and are
/// read-only afterwards. Only the current values sit behind the lock: [`Registry::set`] and
/// [`Registry::reset`] take it exclusively, [`Registry::enabled`] shares it.
#[derive(Debug)]
pub struct Registry<F: Flag> {
    current: RwLock<FxHashMap<F, bool>>,
    initial: FxHashMap<F, bool>,
    by_name: FxHashMap<&'static str, F>,
}

impl<F: Flag> Registry<F> {
    /// Builds a registry from `(identifier, default)` pairs.
    ///
    /// # Panics
    /// If an identifier or a canonical name appears twice.
    pub fn new(vocabulary: impl IntoIterator<Item = (F, bool)>) -> Self {
        let mut current = FxHashMap::default();
        let mut by_name = FxHashMap::default();

        for (flag, value) in vocabulary {
            assert!(current.insert(flag, value).is_none(), "feature '{flag}' declared twice");
            if let Some(other) = by_name.insert(flag.name(), flag) {
                panic!("feature name '{}' shared by {other:?} and {flag:?}", flag.name());
            }
        }

        Self { initial: current.clone(), current: RwLock::new(current), by_name }
    }

    /// Builds a registry holding the whole vocabulary at its declared defaults.
    #[must_use]
    pub fn initialize() -> Self {
        Self::new(F::defaults())
    }

    /// Applies `name -> value` entries.
    ///
    /// Every recognized entry is written, even when the call fails. Unknown names are collected
    /// and, unless the vocabulary's `ALLOW_UNRECOGNIZED` flag is currently enabled, reported
    /// together once the batch has been applied. The call is therefore **not atomic**: a failed
    /// `set` still leaves its recognized entries in effect.
    ///
    /// If a name repeats within one call, the entry iterated last wins.
    ///
    /// # Errors
    /// [`FlagError::UnrecognizedNames`] with the sorted, de-duplicated unknown names.
    pub fn set<I, K, V>(&self, entries: I) -> Result<(), FlagError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Borrow<bool>,
    {
        let mut unknown = BTreeSet::new();
        let mut current = self.current.write();

        for (name, value) in entries {
            let (name, value) = (name.as_ref(), *value.borrow());
            match self.by_name.get(name) {
                Some(flag) => {
                    debug!(flag = name, value, "Feature flag set");
                    current.insert(*flag, value);
                },
                None => {
                    unknown.insert(name.to_owned());
                },
            }
        }

        if unknown.is_empty() {
            return Ok(());
        }

        let tolerated =
            F::ALLOW_UNRECOGNIZED.and_then(|flag| current.get(&flag).copied()).unwrap_or(false);
        drop(current);

        let names: Vec<String> = unknown.into_iter().collect();
        if tolerated {
            warn!(names = %names.join(", "), "Ignoring unrecognized feature flag names");
            Ok(())
        } else {
            Err(FlagError::UnrecognizedNames { names, context: None })
        }
    }

    /// Current value of `flag`.
    ///
    /// # Panics
    /// If the registry was not initialized with `flag`. This is a contract violation, never a
    /// recoverable condition.
    #[must_use]
    pub fn enabled(&self, flag: F) -> bool {
        let value = self.current.read().get(&flag).copied();
        value.unwrap_or_else(|| panic!("feature '{flag}' doesn't exist"))
    }

    /// Restores every flag to the value captured at construction.
    pub fn reset(&self) {
        self.current.write().clone_from(&self.initial);
        info!(flags = self.initial.len(), "Feature flags reset to defaults");
    }

    /// Whether `flag` is part of this registry.
    #[must_use]
    pub fn contains(&self, flag: F) -> bool {
        self.initial.contains_key(&flag)
    }

    /// Number of flags held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.initial.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.initial.is_empty()
    }

    /// Current values keyed by canonical name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<&'static str, bool> {
        self.current.read().iter().map(|(flag, &value)| (flag.name(), value)).collect()
    }

    /// Defaults captured at construction, keyed by canonical name.
    #[must_use]
    pub fn defaults(&self) -> BTreeMap<&'static str, bool> {
        self.initial.iter().map(|(flag, &value)| (flag.name(), value)).collect()
    }
}

impl<F: Flag> Default for Registry<F> {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlagVocabulary;
    use std::collections::HashMap;
    use std::thread;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FlagVocabulary)]
    enum Toggle {
        Alpha,
        #[flag(default = true)]
        Beta,
        Gamma,
        #[flag(allow_unrecognized)]
        Lenient,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FlagVocabulary)]
    enum Strict {
        One,
        #[flag(name = "two")]
        Two,
    }

    #[test]
    fn starts_at_declared_defaults() {
        let registry = Registry::<Toggle>::initialize();
        for &flag in Toggle::VOCABULARY {
            assert_eq!(registry.enabled(flag), flag.default_value(), "{flag}");
        }
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn set_then_get() {
        let registry = Registry::<Toggle>::initialize();
        registry.set([("Alpha", true), ("Beta", false)]).unwrap();
        assert!(registry.enabled(Toggle::Alpha));
        assert!(!registry.enabled(Toggle::Beta));
        assert!(!registry.enabled(Toggle::Gamma));
    }

    #[test]
    fn accepts_borrowed_map_entries() {
        let registry = Registry::<Toggle>::initialize();
        let entries = HashMap::from([("Gamma".to_owned(), true)]);
        registry.set(&entries).unwrap();
        assert!(registry.enabled(Toggle::Gamma));
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let registry = Registry::<Toggle>::initialize();
        registry.set(Vec::<(&str, bool)>::new()).unwrap();
        assert_eq!(registry.snapshot(), registry.defaults());
    }

    #[test]
    fn unknown_names_are_reported_after_applying_known_ones() {
        let registry = Registry::<Toggle>::initialize();
        let err = registry
            .set([("zeta", true), ("Alpha", true), ("totally-bogus-name", true), ("zeta", false)])
            .unwrap_err();

        let expected = ["totally-bogus-name".to_owned(), "zeta".to_owned()];
        assert_eq!(err.unrecognized_names(), Some(&expected[..]));
        assert_eq!(err.to_string(), "unrecognized feature flag names: totally-bogus-name, zeta");
        assert!(registry.enabled(Toggle::Alpha));
    }

    #[test]
    fn lenient_flag_suppresses_unknown_names() {
        let registry = Registry::<Toggle>::initialize();
        registry.set([("Lenient", true)]).unwrap();
        registry.set([("Alpha", true), ("totally-bogus-name", true)]).unwrap();
        assert!(registry.enabled(Toggle::Alpha));
    }

    #[test]
    fn lenient_flag_is_read_after_the_batch() {
        let registry = Registry::<Toggle>::initialize();
        registry.set([("Lenient", true), ("later-flag", true)]).unwrap();

        registry.set([("Lenient", false)]).unwrap();
        assert!(registry.set([("later-flag", true)]).is_err());
    }

    #[test]
    fn vocabulary_without_lenient_flag_is_always_strict() {
        let registry = Registry::<Strict>::initialize();
        let err = registry.set([("two", true), ("Two", true)]).unwrap_err();
        assert_eq!(err.unrecognized_names(), Some(&["Two".to_owned()][..]));
        assert!(registry.enabled(Strict::Two));
        assert!(!registry.enabled(Strict::One));
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let registry = Registry::<Toggle>::initialize();
        registry.set([("Alpha", true), ("Beta", false), ("Lenient", true)]).unwrap();

        registry.reset();
        let once = registry.snapshot();
        registry.reset();

        assert_eq!(once, registry.defaults());
        assert_eq!(registry.snapshot(), once);
        assert!(registry.enabled(Toggle::Beta));
        assert!(!registry.enabled(Toggle::Lenient));
    }

    #[test]
    fn partial_vocabulary_only_contains_given_flags() {
        let registry = Registry::new([(Toggle::Alpha, true)]);
        assert!(registry.contains(Toggle::Alpha));
        assert!(!registry.contains(Toggle::Beta));
        assert!(registry.enabled(Toggle::Alpha));
        assert!(registry.set([("Beta", true)]).is_err());
    }

    #[test]
    #[should_panic(expected = "feature 'Gamma' doesn't exist")]
    fn enabled_panics_on_identifier_outside_registry() {
        let registry = Registry::new([(Toggle::Alpha, false)]);
        let _ = registry.enabled(Toggle::Gamma);
    }

    #[test]
    #[should_panic(expected = "declared twice")]
    fn duplicate_identifier_is_fatal() {
        let _ = Registry::new([(Toggle::Alpha, false), (Toggle::Alpha, true)]);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Twin {
        Left,
        Right,
    }

    impl std::fmt::Display for Twin {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    // Hand-written so the canonical names collide, which the derive refuses to compile.
    impl Flag for Twin {
        const VOCABULARY: &'static [Self] = &[Self::Left, Self::Right];
        const ALLOW_UNRECOGNIZED: Option<Self> = None;

        fn name(self) -> &'static str {
            "same"
        }

        fn default_value(self) -> bool {
            false
        }
    }

    #[test]
    #[should_panic(expected = "shared by")]
    fn duplicate_name_is_fatal() {
        let _ = Registry::<Twin>::initialize();
    }

    #[test]
    fn concurrent_readers_see_whole_values() {
        let registry = Registry::<Toggle>::initialize();

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1_000 {
                        let _ = registry.enabled(Toggle::Alpha);
                        assert!(registry.enabled(Toggle::Beta));
                    }
                });
            }
            scope.spawn(|| {
                for i in 0..1_000 {
                    registry.set([("Alpha", i % 2 == 0)]).unwrap();
                }
            });
        });

        assert!(!registry.enabled(Toggle::Alpha));
    }
}
