//!
//! Naming proxy canister.
//!
//! Initialised with a naming config (TOML) and re-exposes every
//! `IcNamingClient` lookup as an update endpoint. Inter-canister calls are
//! not allowed from plain queries, hence `update`.
//!

use candid::Principal;
use ic_cdk::{export_candid, init, post_upgrade, query, trap, update};
use ic_naming_client::{
    IcNamingClient, NamingConfig, PageRequest, RecordPair, RegistrationDetails,
    RegistrationSummary, RegistryDetails, log, log::Topic,
};
use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<Option<ProxyState>> = const { RefCell::new(None) };
}

///
/// ProxyState
///

struct ProxyState {
    config: NamingConfig,
    client: IcNamingClient,
}

const NOT_INITIALIZED: &str = "naming proxy is not initialized";

fn install(toml: &str) -> Result<(), String> {
    let config =
        NamingConfig::from_toml(toml).map_err(|err| format!("invalid naming config: {err}"))?;

    log!(
        Topic::Config,
        Ok,
        "naming proxy ready registrar={} registry={} resolver={} wait={}",
        config.registrar,
        config.registry,
        config.resolver,
        config.wait
    );

    let client = IcNamingClient::new(&config);
    STATE.with_borrow_mut(|state| *state = Some(ProxyState { config, client }));

    Ok(())
}

// clone out so no borrow is held across an await
fn client() -> Result<IcNamingClient, String> {
    STATE.with_borrow(|state| {
        state
            .as_ref()
            .map(|s| s.client.clone())
            .ok_or_else(|| NOT_INITIALIZED.to_string())
    })
}

fn config_toml() -> Result<String, String> {
    STATE.with_borrow(|state| {
        let state = state.as_ref().ok_or_else(|| NOT_INITIALIZED.to_string())?;

        state.config.to_toml().map_err(|err| err.to_string())
    })
}

//
// LIFECYCLE
//

#[init]
fn init(toml: String) {
    if let Err(err) = install(&toml) {
        trap(err);
    }
}

#[post_upgrade]
fn post_upgrade(toml: String) {
    if let Err(err) = install(&toml) {
        trap(err);
    }
}

#[query]
fn naming_config() -> Result<String, String> {
    config_toml()
}

//
// REGISTRAR
//

#[update]
async fn is_name_available(name: String) -> Result<bool, String> {
    client()?
        .is_name_available(&name)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn expired_time_of_name(name: String) -> Result<u64, String> {
    client()?
        .expired_time_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn names_of_registrant(
    owner: Principal,
    page: PageRequest,
) -> Result<Vec<RegistrationSummary>, String> {
    client()?
        .names_of_registrant(owner, page)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn registrant_of_name(name: String) -> Result<Principal, String> {
    client()?
        .registrant_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn registration_of_name(name: String) -> Result<RegistrationDetails, String> {
    client()?
        .registration_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

//
// REGISTRY
//

#[update]
async fn names_of_controller(owner: Principal, page: PageRequest) -> Result<Vec<String>, String> {
    client()?
        .names_of_controller(owner, page)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn controller_of_name(name: String) -> Result<Principal, String> {
    client()?
        .controller_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn resolver_of_name(name: String) -> Result<Principal, String> {
    client()?
        .resolver_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

#[update]
async fn registry_of_name(name: String) -> Result<RegistryDetails, String> {
    client()?
        .registry_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

//
// RESOLVER
//

#[update]
async fn records_of_name(name: String) -> Result<Vec<RecordPair>, String> {
    client()?
        .records_of_name(&name)
        .await
        .map_err(|err| err.to_string())
}

export_candid!();

///
/// TESTS
///
