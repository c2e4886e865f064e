pub mod cli;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;
