use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};

use crate::config::ServerConfig;

pub fn create_cors(config: &ServerConfig) -> rocket_cors::Cors {
    CorsOptions {
        allowed_origins: AllowedOrigins::some_exact(&config.cors_allowed_origins),
        allowed_methods: [Method::Post, Method::Options]
            .into_iter()
            .map(|m| m.into())
            .collect(),
        allowed_headers: AllowedHeaders::some(&["Accept", "Content-Type", "X-Requested-With"]),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS configuration")
}
