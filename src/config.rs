use std::env;

use crate::logic::{DEFAULT_MAX_SIDE, MAX_SIDE_LIMIT};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173";

/// Server settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Largest accepted board width and height.
    pub max_board_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_board_size: DEFAULT_MAX_SIDE,
            cors_allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_board_size = lookup("MAX_BOARD_SIZE")
            .and_then(|value| value.trim().parse().ok())
            .filter(|&size: &usize| size > 0)
            .map_or(DEFAULT_MAX_SIDE, |size| size.min(MAX_SIDE_LIMIT));

        let cors_allowed_origins = parse_origins(
            &lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        Self {
            max_board_size,
            cors_allowed_origins,
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
