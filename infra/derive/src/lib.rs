#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the flag registry and its collaborators.
//!
//! * [`macro@flagpole_error`] turns an enum into a context-aware `thiserror` error.
//! * [`macro@FlagVocabulary`] generates the identifier/name bijection for a closed flag enum.
//!
//! Both expand to paths rooted at `::flagpole_flags` or `::thiserror`, so consumers must
//! depend on those crates directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>` and to results carrying any wrapped source error.
/// * **Standard Conversions**: Implements `From<T>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants must use named fields.
/// 3. A variant wrapping a source error must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use flagpole_derive::flagpole_error;
/// use std::borrow::Cow;
///
/// #[flagpole_error]
/// pub enum LoadError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, LoadError> {
///     std::fs::read_to_string(path).context("Reading flag file")
/// }
/// ```
#[proc_macro_attribute]
pub fn flagpole_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Derives `flagpole_flags::Flag`, `Display` and `FromStr` for a fieldless enum.
///
/// Every variant is one flag. Its canonical name is the variant identifier unless
/// overridden, and its default is `false` unless overridden.
///
/// # Variant attributes
///
/// * `#[flag(default = true)]` - declared default value.
/// * `#[flag(name = "...")]` - canonical name used for string-keyed access.
/// * `#[flag(allow_unrecognized)]` - marks the flag that relaxes unknown-name validation.
///   At most one variant may carry it.
///
/// # Errors
///
/// Compilation fails for non-enums, generic enums, variants with fields, duplicate
/// canonical names and more than one `allow_unrecognized` variant.
///
/// # Example
///
/// ```rust,ignore
/// use flagpole_derive::FlagVocabulary;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FlagVocabulary)]
/// pub enum Toggle {
///     #[flag(name = "unused")]
///     Unused,
///     #[flag(default = true)]
///     LegacyTls,
///     #[flag(allow_unrecognized)]
///     AllowUnrecognized,
/// }
/// ```
#[proc_macro_derive(FlagVocabulary, attributes(flag))]
pub fn flag_vocabulary(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::vocabulary::expand_derive(input).into()
}
