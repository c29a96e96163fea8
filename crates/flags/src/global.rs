//! Process-wide registry for production wiring.
//!
//! The instance is built lazily from [`FeatureFlag`]'s declared defaults on first use. Code
//! that needs isolation (tests, embedded hosts) should own a [`Registry`] instead.

use crate::{FeatureFlag, FlagError, Registry};
use std::borrow::Borrow;
use std::sync::LazyLock;

static GLOBAL: LazyLock<Registry<FeatureFlag>> = LazyLock::new(Registry::initialize);

/// The shared registry.
#[must_use]
pub fn global() -> &'static Registry<FeatureFlag> {
    &GLOBAL
}

/// [`Registry::set`] on the shared registry.
///
/// # Errors
/// [`FlagError::UnrecognizedNames`] when unknown names are rejected.
pub fn set<I, K, V>(entries: I) -> Result<(), FlagError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<bool>,
{
    GLOBAL.set(entries)
}

/// [`Registry::enabled`] on the shared registry.
#[must_use]
pub fn enabled(flag: FeatureFlag) -> bool {
    GLOBAL.enabled(flag)
}

/// [`Registry::reset`] on the shared registry.
pub fn reset() {
    GLOBAL.reset();
}
