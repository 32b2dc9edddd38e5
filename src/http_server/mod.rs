//! # HTTP Server Module
//!
//! Axum-based HTTP server for the trivia API.
//!
//! # Endpoints
//!
//! - `GET /categories` - category index
//! - `GET /questions` - paginated question list
//! - `POST /questions` - search or create
//! - `DELETE /questions/{id}` - delete a question
//! - `GET /categories/{id}/questions` - questions of one category
//! - `POST /quizzes` - next quiz question
//! - `GET /health` - health check

pub mod category_routes;
pub mod config;
pub mod health_routes;
pub mod question_routes;
pub mod quiz_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::{ApiState, HttpServer};
