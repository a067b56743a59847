use crate::spec::prelude::*;

///
/// RegistryDetails
/// Registry view of a single name (`get_details`).
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistryDetails {
    pub owner: Principal,
    pub name: String,
    pub resolver: Principal,
    pub ttl: u64,
}

// registry responses
pub type GetControlledNamesResponse = NamingResult<Page<String>>;
pub type GetResolverResponse = NamingResult<Principal>;
pub type GetRegistryDetailsResponse = NamingResult<RegistryDetails>;
