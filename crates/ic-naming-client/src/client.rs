//!
//! IcNamingClient
//!
//! Facade over the registrar, registry and resolver stubs. Every operation
//! issues exactly one remote call, unwraps the `{Ok | Err}` envelope and
//! returns the payload. A rejected envelope becomes [`Error::Rejected`]; there
//! is no retry and no fallback.
//!

use crate::{
    Error,
    config::NamingConfig,
    error::CanisterKind,
    log,
    log::Topic,
    spec::{
        ErrorInfo, NamingResult, Page, PageRequest, RecordPair, RegistrationDetails,
        RegistrationSummary, RegistryDetails,
    },
    stub::{
        CanisterRegistrar, CanisterRegistry, CanisterResolver, RegistrarApi, RegistryApi,
        ResolverApi,
    },
};
use candid::Principal;

///
/// IcNamingClient
///

#[derive(Clone, Debug)]
pub struct IcNamingClient<Ar = CanisterRegistrar, Ag = CanisterRegistry, Av = CanisterResolver> {
    registrar: Ar,
    registry: Ag,
    resolver: Av,
}

impl IcNamingClient {
    /// Build a client that reaches the configured canisters via inter-canister calls.
    #[must_use]
    pub const fn new(config: &NamingConfig) -> Self {
        Self {
            registrar: CanisterRegistrar::new(config.registrar, config.wait),
            registry: CanisterRegistry::new(config.registry, config.wait),
            resolver: CanisterResolver::new(config.resolver, config.wait),
        }
    }
}

impl<Ar, Ag, Av> IcNamingClient<Ar, Ag, Av>
where
    Ar: RegistrarApi,
    Ag: RegistryApi,
    Av: ResolverApi,
{
    pub const fn with_stubs(registrar: Ar, registry: Ag, resolver: Av) -> Self {
        Self {
            registrar,
            registry,
            resolver,
        }
    }

    pub const fn registrar(&self) -> &Ar {
        &self.registrar
    }

    pub const fn registry(&self) -> &Ag {
        &self.registry
    }

    pub const fn resolver(&self) -> &Av {
        &self.resolver
    }

    // ---------------------------------------------------------------------
    // Registrar
    // ---------------------------------------------------------------------

    pub async fn is_name_available(&self, name: &str) -> Result<bool, Error> {
        log!(Topic::Registrar, Debug, "available name={name}");
        let result = self.registrar.available(name).await?;

        unwrap_envelope(CanisterKind::Registrar, "available", result)
    }

    /// Expiry timestamp of a registration, as reported by the registrar.
    pub async fn expired_time_of_name(&self, name: &str) -> Result<u64, Error> {
        log!(Topic::Registrar, Debug, "get_name_expires name={name}");
        let result = self.registrar.get_name_expires(name).await?;

        unwrap_envelope(CanisterKind::Registrar, "get_name_expires", result)
    }

    /// Names registered to `owner`, one page at a time.
    pub async fn names_of_registrant(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<Vec<RegistrationSummary>, Error> {
        log!(
            Topic::Registrar,
            Debug,
            "get_names owner={owner} offset={} limit={}",
            page.offset,
            page.limit
        );
        let result = self.registrar.get_names(owner, page).await?;

        unwrap_envelope(CanisterKind::Registrar, "get_names", result).map(Page::into_items)
    }

    pub async fn registrant_of_name(&self, name: &str) -> Result<Principal, Error> {
        log!(Topic::Registrar, Debug, "get_owner name={name}");
        let result = self.registrar.get_owner(name).await?;

        unwrap_envelope(CanisterKind::Registrar, "get_owner", result)
    }

    pub async fn registration_of_name(&self, name: &str) -> Result<RegistrationDetails, Error> {
        log!(Topic::Registrar, Debug, "get_details name={name}");
        let result = self.registrar.get_details(name).await?;

        unwrap_envelope(CanisterKind::Registrar, "get_details", result)
    }

    // ---------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------

    /// Names controlled by `owner`, one page at a time.
    pub async fn names_of_controller(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<Vec<String>, Error> {
        log!(
            Topic::Registry,
            Debug,
            "get_controlled_names owner={owner} offset={} limit={}",
            page.offset,
            page.limit
        );
        let result = self.registry.get_controlled_names(owner, page).await?;

        unwrap_envelope(CanisterKind::Registry, "get_controlled_names", result)
            .map(Page::into_items)
    }

    pub async fn controller_of_name(&self, name: &str) -> Result<Principal, Error> {
        log!(Topic::Registry, Debug, "get_owner name={name}");
        let result = self.registry.get_owner(name).await?;

        unwrap_envelope(CanisterKind::Registry, "get_owner", result)
    }

    pub async fn resolver_of_name(&self, name: &str) -> Result<Principal, Error> {
        log!(Topic::Registry, Debug, "get_resolver name={name}");
        let result = self.registry.get_resolver(name).await?;

        unwrap_envelope(CanisterKind::Registry, "get_resolver", result)
    }

    pub async fn registry_of_name(&self, name: &str) -> Result<RegistryDetails, Error> {
        log!(Topic::Registry, Debug, "get_details name={name}");
        let result = self.registry.get_details(name).await?;

        unwrap_envelope(CanisterKind::Registry, "get_details", result)
    }

    // ---------------------------------------------------------------------
    // Resolver
    // ---------------------------------------------------------------------

    /// Key/value records of a name, in the order the resolver returns them.
    pub async fn records_of_name(&self, name: &str) -> Result<Vec<RecordPair>, Error> {
        log!(Topic::Resolver, Debug, "get_record_value name={name}");
        let result = self.resolver.get_record_value(name).await?;

        unwrap_envelope(CanisterKind::Resolver, "get_record_value", result)
    }
}

impl From<CanisterKind> for Topic {
    fn from(kind: CanisterKind) -> Self {
        match kind {
            CanisterKind::Registrar => Self::Registrar,
            CanisterKind::Registry => Self::Registry,
            CanisterKind::Resolver => Self::Resolver,
        }
    }
}

fn unwrap_envelope<T>(
    canister: CanisterKind,
    method: &'static str,
    result: NamingResult<T>,
) -> Result<T, Error> {
    match result {
        Ok(payload) => Ok(payload),
        Err(ErrorInfo { code, message }) => {
            log!(
                Topic::from(canister),
                Warn,
                "{canister}.{method} rejected ({code}): {message}"
            );

            Err(Error::Rejected {
                canister,
                method,
                code,
                message,
            })
        }
    }
}

///
/// TESTS
///
