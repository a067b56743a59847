//! Client facade for the IC Naming canisters.
//!
//! The naming service is split across three canisters:
//! - the **registrar** owns registrations (availability, expiry, registrant),
//! - the **registry** owns control (controller, resolver, ttl),
//! - the **resolver** owns the key/value records attached to a name.
//!
//! [`IcNamingClient`] maps friendly lookups onto exactly one remote call each
//! and unwraps the `{Ok | Err}` envelope the canisters return.
//!
//! ## Layering
//!
//! - `client` is the facade.
//! - `stub/` holds one async trait per remote canister plus the ic-cdk
//!   implementations.
//! - `spec/` holds the candid bindings shared with the remote canisters.
//! - `infra/` wraps raw inter-canister calls.
//! - `config` and `log` are the ambient layers.

pub mod client;
pub mod config;
pub mod error;
pub mod infra;
pub mod log;
pub mod spec;
pub mod stub;
#[cfg(test)]
pub mod test;

pub use client::IcNamingClient;
pub use config::{ConfigError, NamingConfig, WaitMode};
pub use error::Error;
pub use spec::{
    ErrorInfo, NamingResult, Page, PageRequest, RecordPair, RegistrationDetails,
    RegistrationSummary, RegistryDetails,
};
pub use stub::{
    CanisterRegistrar, CanisterRegistry, CanisterResolver, RegistrarApi, RegistryApi, ResolverApi,
};

pub use candid::Principal;

///
/// Crate Version
///

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
