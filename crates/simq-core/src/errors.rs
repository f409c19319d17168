use crate::domain::ProviderKind;

/// The step of a provider flow an upstream failure happened in.
///
/// The service maps (provider, stage) to a static user-facing reply, so
/// adapters tag every failure with the stage that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// CMLink step 1: service-credential login.
    Login,
    /// CMLink step 2: access-token exchange.
    AccessToken,
    /// CMLink step 3: subscribed-bundle fetch.
    BundleFetch,
    /// 3HK step 1: MSISDN lookup by ICCID.
    Msisdn,
    /// 3HK step 2: customer-info lookup by MSISDN.
    CustomerInfo,
    /// Holafly: card lookup by ICCID.
    Card,
}

/// Core error type.
///
/// Adapter crates map their specific failures into this type so the service
/// can handle them consistently (which user-facing reply to send).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// Transport-level failure talking to an upstream (includes timeouts).
    #[error("{provider} unreachable during {stage:?}: {detail}")]
    Unreachable {
        provider: ProviderKind,
        stage: Stage,
        detail: String,
    },

    /// The upstream answered, but a field required to proceed was missing
    /// or had the wrong type.
    #[error("{provider} returned a malformed {stage:?} response: {detail}")]
    Malformed {
        provider: ProviderKind,
        stage: Stage,
        detail: String,
    },

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
