//! # HTTP Server Module
//!
//! The HTTP surface of the card service: routing, response mapping,
//! cross-origin policy, and server assembly.
//!
//! # Endpoints
//!
//! - `GET /password-cards` - list all cards
//! - `POST /password-cards` - create a card (identifier server-assigned)
//! - `PUT /password-cards/:id` - replace a card wholly
//! - `DELETE /password-cards/:id` - remove a card (idempotent)
//! - `OPTIONS *` - cross-origin pre-flight, answered by the CORS layer

pub mod card_routes;
pub mod config;
pub mod errors;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
