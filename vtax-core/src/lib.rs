//! Core rule engines for the Portuguese vehicle tax simulators: ISV
//! (one-time registration tax) and IUC (annual circulation tax), 2026
//! tables.
//!
//! The engines are pure and synchronous; form handling, persistence and
//! rendering live in the adapters that call them.

pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{IsvError, IsvSimulator, IucError, IucSimulator};
pub use models::*;
