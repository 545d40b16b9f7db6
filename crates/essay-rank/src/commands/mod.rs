//! Command implementations.

pub mod info;
pub mod rank;
#[cfg(feature = "server")]
pub mod serve;
