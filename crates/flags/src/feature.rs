use crate::FlagVocabulary;

/// The service's flag vocabulary.
///
/// Canonical names are the variant identifiers, except for the test sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FlagVocabulary)]
pub enum FeatureFlag {
    /// Sentinel reserved for tests; no call site branches on it.
    #[flag(name = "unused")]
    Unused,

    /// Honour the `validationmethods` CAA parameter.
    CAAValidationMethods,
    /// Honour the `accounturi` CAA parameter.
    CAAAccountURI,
    /// Wait on remote validation results before deciding an authorization.
    EnforceMultiVA,
    /// Wait for every remote validation result, not just the quorum.
    MultiVAFullResults,
    /// Reject unauthenticated GET requests for protocol resources.
    MandatoryPOSTAsGET,
    /// Allow ECDSA issuance for every account.
    ECDSAForAll,
    /// Expose the draft renewal-info endpoint.
    ServeRenewalInfo,
    /// Allow an already revoked certificate to be re-revoked as `keyCompromise`.
    AllowReRevocation,
    /// Enforce the browser root program rules on revocation reasons.
    MozRevocationReasons,
    /// Allow TLS 1.0 and 1.1 on outbound validation redirects.
    #[flag(default = true)]
    OldTLSOutbound,
    /// Accept inbound requests negotiated with TLS 1.0 and 1.1.
    #[flag(default = true)]
    OldTLSInbound,
    /// Accept CSRs self-signed with SHA-1.
    #[flag(default = true)]
    SHA1CSRs,

    /// Registry-internal: tolerate unknown names in [`Registry::set`](crate::Registry::set).
    #[flag(allow_unrecognized)]
    AllowUnrecognizedFeatures,
}
