//! Cora daemon - HTTP front end for the compliance assistant.

pub mod routes;
pub mod server;
