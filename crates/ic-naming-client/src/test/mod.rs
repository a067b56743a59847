//! Test-only helpers shared across modules.

pub mod support;
