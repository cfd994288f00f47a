//! Outpost - Minimal HTTP/1.1 File Server
//!
//! Core library implementing the wire protocol, route dispatch, and
//! per-connection keep-alive handling.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
