pub mod config;
pub mod http_client;
pub mod input;
pub mod session;
pub mod terminal;
