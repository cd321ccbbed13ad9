//! # Card Store Module
//!
//! Holds the authoritative, process-lifetime set of password cards and
//! owns identifier generation. All access is serialized through a single
//! mutex so concurrent handlers observe a linearizable history.

pub mod card;
pub mod errors;
pub mod memory;

pub use card::PasswordCard;
pub use errors::{StoreError, StoreResult};
pub use memory::CardStore;
