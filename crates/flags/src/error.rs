use std::borrow::Cow;

/// Recoverable failures of the flag registry and its configuration section.
///
/// Querying an identifier the registry does not know is not represented here: that is a
/// contract violation and [`Registry::enabled`](crate::Registry::enabled) panics instead.
#[flagpole_derive::flagpole_error]
pub enum FlagError {
    /// One or more names passed to [`Registry::set`](crate::Registry::set) are not in the
    /// vocabulary. Recognized entries of the same call have already been applied.
    #[error("unrecognized feature flag names{}: {}", format_context(.context), join_names(.names))]
    UnrecognizedNames { names: Vec<String>, context: Option<Cow<'static, str>> },

    /// A single name could not be parsed into a flag identifier.
    #[error("unknown feature flag{}: '{name}'", format_context(.context))]
    UnknownName { name: String, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The flag configuration is not valid JSON or has the wrong shape.
    #[error("Invalid flag configuration{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback, also used for malformed `NAME=VALUE` overrides.
    #[error("Internal flag error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

impl FlagError {
    /// Names rejected by [`Registry::set`](crate::Registry::set), if this is that error.
    #[must_use]
    pub fn unrecognized_names(&self) -> Option<&[String]> {
        match self {
            Self::UnrecognizedNames { names, .. } => Some(names),
            _ => None,
        }
    }
}
