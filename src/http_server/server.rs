//! # HTTP Server
//!
//! Combines the route modules into a single Axum router behind the CORS
//! and fixed-header layers, then binds and serves.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::errors::ApiError;
use crate::observability::Logger;
use crate::store::Store;

use super::category_routes::category_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::question_routes::question_routes;
use super::quiz_routes::quiz_routes;

/// State shared across route handlers
pub struct ApiState {
    pub store: Arc<dyn Store>,
}

/// HTTP server for the trivia API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store` with the given configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn Store>) -> Self {
        let router = Self::build_router(store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(store: Arc<dyn Store>) -> Router {
        let state = Arc::new(ApiState { store });

        // Permissive CORS, plus two fixed headers stamped on every
        // response rather than only on preflights
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let allow_headers = SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("Content-Type,Authorization,true"),
        );
        let allow_methods = SetResponseHeaderLayer::overriding(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("GET,PUT,POST,DELETE,OPTIONS"),
        );

        Router::new()
            .merge(health_routes())
            .merge(category_routes(state.clone()))
            .merge(question_routes(state.clone()))
            .merge(quiz_routes(state))
            // Unrouted paths still answer with the JSON error envelope
            .fallback(fallback_handler)
            .layer(cors)
            .layer(allow_headers)
            .layer(allow_methods)
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
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        println!("Starting triviad HTTP server on {}", addr);
        println!("Health check: http://{}/health", addr);

        Logger::info("HTTP_SERVER_STARTED", &[("addr", &addr.to_string())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn fallback_handler() -> ApiError {
    ApiError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::with_config(
            HttpServerConfig::default(),
            Arc::new(MemoryStore::new()),
        );
        let _router = server.router();
        // Server creates successfully
    }
}
