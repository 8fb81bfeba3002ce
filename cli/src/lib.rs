//! statefacts-cli library: exposes modules for the binary and for tests.

pub mod commands;
pub mod http;
