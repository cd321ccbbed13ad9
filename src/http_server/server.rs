//! # HTTP Server
//!
//! Assembles the card routes, the cross-origin layer, and request
//! tracing into one Axum server.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::CardStore;

use super::card_routes::card_routes;
use super::config::HttpServerConfig;

/// HTTP server for the card service
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router();
        Self { config, router }
    }

    /// Build the router over a freshly constructed store.
    ///
    /// The store lives exactly as long as the process; every handler
    /// shares the one instance through `Arc`.
    fn build_router() -> Router {
        let store = Arc::new(CardStore::new());

        // Permissive cross-origin policy: any origin, the five CRUD
        // verbs, and the fixed request-header allow-list. The layer
        // answers OPTIONS pre-flight itself; no handler runs for it.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::ACCEPT,
                header::CONTENT_TYPE,
                header::CONTENT_LENGTH,
                header::ACCEPT_ENCODING,
                header::AUTHORIZATION,
                HeaderName::from_static("x-csrf-token"),
            ]);

        // The contract puts all three cross-origin headers on every
        // response; the CORS layer emits allow-methods/allow-headers
        // only on pre-flight answers, where its values win.
        let allow_methods = SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, GET, OPTIONS, PUT, DELETE"),
        );
        let allow_headers = SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(
                "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization",
            ),
        );

        Router::new()
            .merge(card_routes(store))
            .layer(cors)
            .layer(allow_methods)
            .layer(allow_headers)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "cardvault listening");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
