use crate::spec::ErrorInfo;
use candid::Principal;

/// Deterministic non-anonymous principal for tests.
pub fn p(id: u8) -> Principal {
    Principal::from_slice(&[id; 29])
}

pub fn rejected(code: u32, message: &str) -> ErrorInfo {
    ErrorInfo {
        code,
        message: message.to_string(),
    }
}
