use crate::config::ConfigError;
use candid::Error as CandidError;
use derive_more::Display;
use ic_cdk::call::{CallFailed, CandidDecodeFailed};
use thiserror::Error as ThisError;

///
/// Error
///
/// Every facade operation fails with this type. A rejected envelope is the
/// only domain failure; everything else is transport or configuration.
///

#[derive(Debug, ThisError)]
pub enum Error {
    /// The remote canister answered with `Err` in its result envelope.
    #[error("{canister}.{method} rejected ({code}): {message}")]
    Rejected {
        canister: CanisterKind,
        method: &'static str,
        code: u32,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    // candid catch-all errors
    #[error(transparent)]
    CallFailed(#[from] CallFailed),

    #[error(transparent)]
    Candid(#[from] CandidError),

    #[error(transparent)]
    CandidDecode(#[from] CandidDecodeFailed),
}

impl Error {
    /// Remote error code when the envelope was rejected.
    #[must_use]
    pub const fn rejected_code(&self) -> Option<u32> {
        match self {
            Self::Rejected { code, .. } => Some(*code),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

///
/// CanisterKind
/// Which of the three naming canisters a call went to.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum CanisterKind {
    #[display("registrar")]
    Registrar,

    #[display("registry")]
    Registry,

    #[display("resolver")]
    Resolver,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_names_the_call() {
        let err = Error::Rejected {
            canister: CanisterKind::Registry,
            method: "get_owner",
            code: 404,
            message: "name not found".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "registry.get_owner rejected (404): name not found"
        );
        assert_eq!(err.rejected_code(), Some(404));
        assert!(err.is_rejected());
    }

    #[test]
    fn candid_failures_convert_with_question_mark() {
        fn decode(bytes: &[u8]) -> Result<u64, Error> {
            Ok(candid::decode_one(bytes)?)
        }

        let err = decode(&[0, 1, 2]).unwrap_err();

        assert!(matches!(err, Error::Candid(_)));
        assert!(!err.is_rejected());
    }

    #[test]
    fn config_errors_are_not_rejections() {
        let err = Error::from(ConfigError::CannotParseToml("bad".to_string()));

        assert!(!err.is_rejected());
        assert_eq!(err.rejected_code(), None);
    }
}
