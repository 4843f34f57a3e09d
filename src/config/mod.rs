//! Configuration module for the blog backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON file holding all posts
    pub data_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("BLOG_DATA_PATH")
            .unwrap_or_else(|_| "./data/blogposts.json".to_string())
            .into();

        let raw_bind_addr =
            env::var("BLOG_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5001".to_string());
        let bind_addr = raw_bind_addr.parse().map_err(|e| {
            AppError::Internal(format!("Invalid BLOG_BIND_ADDR '{}': {}", raw_bind_addr, e))
        })?;

        let log_level = env::var("BLOG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            data_path,
            bind_addr,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the env mutations cannot race each other.
    #[test]
    fn test_config_from_env() {
        env::remove_var("BLOG_DATA_PATH");
        env::remove_var("BLOG_BIND_ADDR");
        env::remove_var("BLOG_LOG_LEVEL");

        let config = Config::from_env().unwrap();

        assert_eq!(config.data_path, PathBuf::from("./data/blogposts.json"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5001");
        assert_eq!(config.log_level, "info");

        env::set_var("BLOG_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("BLOG_BIND_ADDR"));

        env::set_var("BLOG_BIND_ADDR", "0.0.0.0:8080");
        env::set_var("BLOG_DATA_PATH", "/tmp/posts.json");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.data_path, PathBuf::from("/tmp/posts.json"));

        env::remove_var("BLOG_BIND_ADDR");
        env::remove_var("BLOG_DATA_PATH");
    }
}
