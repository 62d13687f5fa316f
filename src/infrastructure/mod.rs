pub mod artifacts;
pub mod auth;
pub mod config;
pub mod engine;
pub mod http;
