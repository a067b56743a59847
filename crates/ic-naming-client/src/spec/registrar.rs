use crate::spec::prelude::*;

///
/// RegistrationSummary
/// One entry of the registrant name list (`get_names`).
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationSummary {
    pub name: String,
    pub created_at: u64,
    pub expired_at: u64,
}

///
/// RegistrationDetails
/// Registrar view of a single name (`get_details`).
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationDetails {
    pub owner: Principal,
    pub name: String,
    pub created_at: u64,
    pub expired_at: u64,
}

// registrar responses
pub type AvailableResponse = NamingResult<bool>;
pub type GetNameExpiresResponse = NamingResult<u64>;
pub type GetNamesResponse = NamingResult<Page<RegistrationSummary>>;
pub type GetOwnerResponse = NamingResult<Principal>;
pub type GetRegistrationDetailsResponse = NamingResult<RegistrationDetails>;
