use crate::{Error, config::WaitMode};
use candid::{
    CandidType, Principal, encode_one,
    utils::{ArgumentEncoder, encode_args},
};
use ic_cdk::call::{Call as IcCall, Response as IcResponse};
use serde::de::DeserializeOwned;

///
/// Call
/// Raw IC call builder with no retry or policy.
///

pub struct Call;

impl Call {
    #[must_use]
    pub fn new(wait: WaitMode, canister_id: impl Into<Principal>, method: &str) -> CallBuilder {
        CallBuilder {
            wait,
            canister_id: canister_id.into(),
            method: method.to_string(),
            args: None,
        }
    }
}

///
/// CallBuilder
///

pub struct CallBuilder {
    wait: WaitMode,
    canister_id: Principal,
    method: String,
    args: Option<Vec<u8>>,
}

impl CallBuilder {
    pub fn try_with_arg<A: CandidType>(mut self, arg: A) -> Result<Self, Error> {
        let bytes = encode_one(arg)?;
        self.args = Some(bytes);

        Ok(self)
    }

    pub fn try_with_args<A: ArgumentEncoder>(mut self, args: A) -> Result<Self, Error> {
        let bytes = encode_args(args)?;
        self.args = Some(bytes);

        Ok(self)
    }

    #[must_use]
    pub const fn wait(&self) -> WaitMode {
        self.wait
    }

    #[must_use]
    pub const fn canister_id(&self) -> Principal {
        self.canister_id
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn raw_args(&self) -> Option<&[u8]> {
        self.args.as_deref()
    }

    pub async fn execute(self) -> Result<CallResult, Error> {
        let mut call = match self.wait {
            WaitMode::Bounded => IcCall::bounded_wait(self.canister_id, &self.method),
            WaitMode::Unbounded => IcCall::unbounded_wait(self.canister_id, &self.method),
        };

        if let Some(ref args) = self.args {
            call = call.with_raw_args(args);
        }

        let response = call.await?;

        Ok(CallResult { inner: response })
    }
}

///
/// CallResult
///

pub struct CallResult {
    inner: IcResponse,
}

impl CallResult {
    pub fn candid<R>(&self) -> Result<R, Error>
    where
        R: CandidType + DeserializeOwned,
    {
        self.inner.candid().map_err(Error::from)
    }
}

///
/// TESTS
///
