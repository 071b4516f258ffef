mod config;

pub use config::{ConfigError, TypingConfig};
