pub mod config;
pub mod game;
pub mod protocol;
pub mod server;
