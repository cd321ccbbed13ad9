//! cardvault - a volatile, in-memory password card service
//!
//! Two components, composed directly: the [`store`] module owns the
//! authoritative card map behind one mutex, and the [`http_server`]
//! module exposes it over plain HTTP with a permissive cross-origin
//! policy. State lives for the process lifetime only.

pub mod http_server;
pub mod store;
