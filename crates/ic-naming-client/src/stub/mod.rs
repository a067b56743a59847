//!
//! Remote stubs for the three naming canisters.
//!
//! Each trait method maps 1:1 onto a candid method of the remote canister.
//! The outer `Result` is the transport outcome; the inner [`NamingResult`] is
//! the envelope the remote canister produced, left for the facade to unwrap.
//!

mod canister;

pub use canister::*;

use crate::{
    Error,
    spec::{
        NamingResult, Page, PageRequest, RecordPair, RegistrationDetails, RegistrationSummary,
        RegistryDetails,
    },
};
use async_trait::async_trait;
use candid::Principal;

///
/// RegistrarApi
///

#[async_trait(?Send)]
pub trait RegistrarApi {
    async fn available(&self, name: &str) -> Result<NamingResult<bool>, Error>;

    async fn get_name_expires(&self, name: &str) -> Result<NamingResult<u64>, Error>;

    async fn get_names(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<NamingResult<Page<RegistrationSummary>>, Error>;

    async fn get_owner(&self, name: &str) -> Result<NamingResult<Principal>, Error>;

    async fn get_details(&self, name: &str) -> Result<NamingResult<RegistrationDetails>, Error>;
}

///
/// RegistryApi
///

#[async_trait(?Send)]
pub trait RegistryApi {
    async fn get_controlled_names(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<NamingResult<Page<String>>, Error>;

    async fn get_owner(&self, name: &str) -> Result<NamingResult<Principal>, Error>;

    async fn get_resolver(&self, name: &str) -> Result<NamingResult<Principal>, Error>;

    async fn get_details(&self, name: &str) -> Result<NamingResult<RegistryDetails>, Error>;
}

///
/// ResolverApi
///

#[async_trait(?Send)]
pub trait ResolverApi {
    async fn get_record_value(&self, name: &str) -> Result<NamingResult<Vec<RecordPair>>, Error>;
}
