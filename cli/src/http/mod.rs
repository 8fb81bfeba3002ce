//! HTTP server module: the U.S. states REST API.

pub mod middleware;
pub mod models;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

pub use models::*;
pub use server::*;
pub use state::*;
