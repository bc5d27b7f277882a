pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod logging;
pub mod server;
pub mod signature;
pub mod slack;
