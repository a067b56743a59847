use crate::{
    Error,
    config::WaitMode,
    infra::call::{Call, CallBuilder},
    spec::{
        AvailableResponse, GetControlledNamesResponse, GetNameExpiresResponse, GetNamesResponse,
        GetOwnerResponse, GetRecordValueResponse, GetRegistrationDetailsResponse,
        GetRegistryDetailsResponse, GetResolverResponse, PageRequest,
    },
    stub::{RegistrarApi, RegistryApi, ResolverApi},
};
use async_trait::async_trait;
use candid::{CandidType, Principal};
use serde::de::DeserializeOwned;

///
/// CanisterTarget
/// Canister id plus wait mode shared by the ic-cdk stubs.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct CanisterTarget {
    canister_id: Principal,
    wait: WaitMode,
}

impl CanisterTarget {
    fn name_call(&self, method: &str, name: &str) -> Result<CallBuilder, Error> {
        Call::new(self.wait, self.canister_id, method).try_with_arg(name)
    }

    fn page_call(
        &self,
        method: &str,
        owner: Principal,
        page: PageRequest,
    ) -> Result<CallBuilder, Error> {
        Call::new(self.wait, self.canister_id, method).try_with_args((owner, page))
    }
}

async fn execute<R>(call: CallBuilder) -> Result<R, Error>
where
    R: CandidType + DeserializeOwned,
{
    call.execute().await?.candid::<R>()
}

macro_rules! canister_stub {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $name {
            target: CanisterTarget,
        }

        impl $name {
            #[must_use]
            pub const fn new(canister_id: Principal, wait: WaitMode) -> Self {
                Self {
                    target: CanisterTarget { canister_id, wait },
                }
            }

            #[must_use]
            pub const fn canister_id(&self) -> Principal {
                self.target.canister_id
            }

            #[must_use]
            pub const fn wait(&self) -> WaitMode {
                self.target.wait
            }
        }
    };
}

canister_stub!(
    ///
    /// CanisterRegistrar
    /// Registrar stub backed by inter-canister calls.
    ///
    CanisterRegistrar
);

canister_stub!(
    ///
    /// CanisterRegistry
    /// Registry stub backed by inter-canister calls.
    ///
    CanisterRegistry
);

canister_stub!(
    ///
    /// CanisterResolver
    /// Resolver stub backed by inter-canister calls.
    ///
    CanisterResolver
);

impl CanisterRegistrar {
    pub(crate) fn available_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("available", name)
    }

    pub(crate) fn get_name_expires_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_name_expires", name)
    }

    pub(crate) fn get_names_call(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<CallBuilder, Error> {
        self.target.page_call("get_names", owner, page)
    }

    pub(crate) fn get_owner_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_owner", name)
    }

    pub(crate) fn get_details_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_details", name)
    }
}

#[async_trait(?Send)]
impl RegistrarApi for CanisterRegistrar {
    async fn available(&self, name: &str) -> Result<AvailableResponse, Error> {
        execute(self.available_call(name)?).await
    }

    async fn get_name_expires(&self, name: &str) -> Result<GetNameExpiresResponse, Error> {
        execute(self.get_name_expires_call(name)?).await
    }

    async fn get_names(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<GetNamesResponse, Error> {
        execute(self.get_names_call(owner, page)?).await
    }

    async fn get_owner(&self, name: &str) -> Result<GetOwnerResponse, Error> {
        execute(self.get_owner_call(name)?).await
    }

    async fn get_details(&self, name: &str) -> Result<GetRegistrationDetailsResponse, Error> {
        execute(self.get_details_call(name)?).await
    }
}

impl CanisterRegistry {
    pub(crate) fn get_controlled_names_call(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<CallBuilder, Error> {
        self.target.page_call("get_controlled_names", owner, page)
    }

    pub(crate) fn get_owner_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_owner", name)
    }

    pub(crate) fn get_resolver_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_resolver", name)
    }

    pub(crate) fn get_details_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_details", name)
    }
}

#[async_trait(?Send)]
impl RegistryApi for CanisterRegistry {
    async fn get_controlled_names(
        &self,
        owner: Principal,
        page: PageRequest,
    ) -> Result<GetControlledNamesResponse, Error> {
        execute(self.get_controlled_names_call(owner, page)?).await
    }

    async fn get_owner(&self, name: &str) -> Result<GetOwnerResponse, Error> {
        execute(self.get_owner_call(name)?).await
    }

    async fn get_resolver(&self, name: &str) -> Result<GetResolverResponse, Error> {
        execute(self.get_resolver_call(name)?).await
    }

    async fn get_details(&self, name: &str) -> Result<GetRegistryDetailsResponse, Error> {
        execute(self.get_details_call(name)?).await
    }
}

impl CanisterResolver {
    pub(crate) fn get_record_value_call(&self, name: &str) -> Result<CallBuilder, Error> {
        self.target.name_call("get_record_value", name)
    }
}

#[async_trait(?Send)]
impl ResolverApi for CanisterResolver {
    async fn get_record_value(&self, name: &str) -> Result<GetRecordValueResponse, Error> {
        execute(self.get_record_value_call(name)?).await
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::support::p;
    use candid::Decode;

    fn assert_name_call(call: &CallBuilder, canister: Principal, method: &str, name: &str) {
        assert_eq!(call.canister_id(), canister);
        assert_eq!(call.method(), method);
        assert_eq!(Decode!(call.raw_args().unwrap(), String).unwrap(), name);
    }

    fn assert_page_call(
        call: &CallBuilder,
        canister: Principal,
        method: &str,
        owner: Principal,
        page: PageRequest,
    ) {
        assert_eq!(call.canister_id(), canister);
        assert_eq!(call.method(), method);

        let (got_owner, got_page) =
            Decode!(call.raw_args().unwrap(), Principal, PageRequest).unwrap();
        assert_eq!(got_owner, owner);
        assert_eq!(got_page, page);
    }

    #[test]
    fn stubs_remember_target_and_wait() {
        let registrar = CanisterRegistrar::new(p(1), WaitMode::Bounded);
        let resolver = CanisterResolver::new(p(3), WaitMode::Unbounded);

        assert_eq!(registrar.canister_id(), p(1));
        assert_eq!(registrar.wait(), WaitMode::Bounded);
        assert_eq!(resolver.canister_id(), p(3));
        assert_eq!(resolver.wait(), WaitMode::Unbounded);
    }

    #[test]
    fn registrar_calls_target_registrar_methods() {
        let registrar = CanisterRegistrar::new(p(1), WaitMode::Unbounded);
        let page = PageRequest::new(0, 100);

        assert_name_call(&registrar.available_call("alice").unwrap(), p(1), "available", "alice");
        assert_name_call(
            &registrar.get_name_expires_call("alice").unwrap(),
            p(1),
            "get_name_expires",
            "alice",
        );
        assert_page_call(
            &registrar.get_names_call(p(9), page).unwrap(),
            p(1),
            "get_names",
            p(9),
            page,
        );
        assert_name_call(&registrar.get_owner_call("alice").unwrap(), p(1), "get_owner", "alice");
        assert_name_call(
            &registrar.get_details_call("alice").unwrap(),
            p(1),
            "get_details",
            "alice",
        );
    }

    #[test]
    fn registry_calls_target_registry_methods() {
        let registry = CanisterRegistry::new(p(2), WaitMode::Unbounded);
        let page = PageRequest::new(40, 20);

        assert_page_call(
            &registry.get_controlled_names_call(p(9), page).unwrap(),
            p(2),
            "get_controlled_names",
            p(9),
            page,
        );
        assert_name_call(&registry.get_owner_call("bob").unwrap(), p(2), "get_owner", "bob");
        assert_name_call(
            &registry.get_resolver_call("bob").unwrap(),
            p(2),
            "get_resolver",
            "bob",
        );
        assert_name_call(&registry.get_details_call("bob").unwrap(), p(2), "get_details", "bob");
    }

    #[test]
    fn resolver_calls_get_record_value() {
        let resolver = CanisterResolver::new(p(3), WaitMode::Unbounded);

        assert_name_call(
            &resolver.get_record_value_call("carol").unwrap(),
            p(3),
            "get_record_value",
            "carol",
        );
    }

    #[test]
    fn configured_wait_mode_reaches_every_call() {
        let registrar = CanisterRegistrar::new(p(1), WaitMode::Bounded);
        let registry = CanisterRegistry::new(p(2), WaitMode::Bounded);

        assert_eq!(registrar.available_call("a").unwrap().wait(), WaitMode::Bounded);
        assert_eq!(
            registry
                .get_controlled_names_call(p(9), PageRequest::new(0, 1))
                .unwrap()
                .wait(),
            WaitMode::Bounded
        );
    }
}
