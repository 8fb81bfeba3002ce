pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod facts;
pub mod states;
