use candid::Principal;
use thiserror::Error as ThisError;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

/// A naming canister id must address a real canister.
pub fn validate_canister_id(pid: &Principal, context: &str) -> Result<(), ConfigSchemaError> {
    if *pid == Principal::anonymous() {
        return Err(ConfigSchemaError::ValidationError(format!(
            "{context} cannot be the anonymous principal"
        )));
    }

    if *pid == Principal::management_canister() {
        return Err(ConfigSchemaError::ValidationError(format!(
            "{context} cannot be the management canister"
        )));
    }

    Ok(())
}
