//! # Feature Flags
//!
//! A process-wide, concurrency-safe registry of named boolean feature flags.
//!
//! The vocabulary is a closed enum deriving [`FlagVocabulary`]; every variant is one flag
//! with a canonical name and a declared default. A [`Registry`] owns the live values behind
//! a single reader/writer lock:
//!
//! * [`Registry::set`] bulk-updates flags by name. Unknown names are collected and reported
//!   together, **after** every recognized entry has been applied (the batch is not atomic).
//!   The check is skipped while [`FeatureFlag::AllowUnrecognizedFeatures`] is enabled.
//! * [`Registry::enabled`] reads one flag by identifier. Asking for an identifier the registry
//!   was not initialized with is a programming error and panics.
//! * [`Registry::reset`] restores the defaults captured at construction.
//!
//! Explicit registries are the primary API, which keeps tests isolated. Production wiring can
//! use the lazily initialized process-wide instance in [`global`].
//!
//! ## Example
//!
//! ```rust
//! use flagpole_flags::{FeatureFlag, Registry};
//!
//! let registry = Registry::<FeatureFlag>::initialize();
//! assert!(!registry.enabled(FeatureFlag::EnforceMultiVA));
//!
//! registry.set([("EnforceMultiVA", true)]).unwrap();
//! assert!(registry.enabled(FeatureFlag::EnforceMultiVA));
//!
//! registry.reset();
//! assert!(!registry.enabled(FeatureFlag::EnforceMultiVA));
//! ```

extern crate self as flagpole_flags;

pub mod config;
mod error;
mod feature;
mod flag;
pub mod global;
mod registry;

pub use crate::config::FlagsConfig;
pub use crate::error::{FlagError, FlagErrorExt};
pub use crate::feature::FeatureFlag;
pub use crate::flag::Flag;
pub use crate::registry::Registry;
pub use flagpole_derive::FlagVocabulary;
