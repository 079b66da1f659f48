pub mod client;
pub mod components;
pub mod config;
pub mod launch;
pub mod logging;
pub mod server;

pub use config::{AppConfig, ConfigError, Provider};
pub use launch::{bootstrap, LaunchError, Variant};
