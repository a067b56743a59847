//!
//! Candid bindings for the IC Naming canisters.
//! Field names match the remote interfaces; the facade forwards these values
//! untouched.
//!

pub mod registrar;
pub mod registry;
pub mod resolver;

pub use registrar::*;
pub use registry::*;
pub use resolver::*;

/// Shared imports for spec modules so type definitions stay concise.
pub mod prelude {
    pub use super::{ErrorInfo, NamingResult, Page, PageRequest};
    pub use candid::{CandidType, Principal};
    pub use serde::{Deserialize, Serialize};
}

use prelude::*;

///
/// ErrorInfo
/// Payload of a rejected envelope.
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub code: u32,
    pub message: String,
}

///
/// NamingResult
/// The `variant { Ok : T; Err : ErrorInfo }` envelope every naming method returns.
///

pub type NamingResult<T> = Result<T, ErrorInfo>;

///
/// PageRequest
/// Pagination envelope to avoid passing raw integers around
///

#[derive(CandidType, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    #[must_use]
    pub const fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }
}

///
/// Page
/// Paginated list response
///

#[derive(CandidType, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

///
/// TESTS
///
