//! triviad - HTTP API for a trivia question bank and quiz player
//!
//! The crate is split along the request path: `http_server` owns routing
//! and middleware, `api` owns the contract (errors, schemas, bodies,
//! pagination, quiz selection), and `store` owns persistence behind the
//! `Store` trait.

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
