//! Low-level IC call helpers.

pub mod call;
