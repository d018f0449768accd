//! Tax calculation modules for the ISV and IUC simulators.
//!
//! Both simulators are pure functions over their input record and the
//! statutory tables in [`crate::tables`].

pub mod common;
pub mod isv;
pub mod iuc;

pub use isv::{IsvError, IsvSimulator};
pub use iuc::{IucError, IucSimulator};
