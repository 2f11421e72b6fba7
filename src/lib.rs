//! HTTP CRUD service for blog posts backed by MongoDB.

pub mod config;
pub mod database;
pub mod middleware;
pub mod post;
pub mod router;
pub mod server;
pub mod utils;

pub use config::Config;
pub use server::{BlogServer, ServerError, serve, start};
