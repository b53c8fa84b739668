use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

pub mod cors;

pub use cors::create_cors_layer;

const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost:5432/events?sslmode=disable";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub request_timeout: Duration,
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: parse_var("HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: parse_var("PORT", DEFAULT_PORT),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| cors::DEFAULT_ALLOWED_ORIGINS.to_string()),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Config: invalid {} '{}', using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_falls_back_on_garbage() {
        std::env::set_var("EVENTS_TEST_BAD_PORT", "eighty");
        assert_eq!(parse_var("EVENTS_TEST_BAD_PORT", 8080u16), 8080);

        std::env::set_var("EVENTS_TEST_GOOD_PORT", " 9000 ");
        assert_eq!(parse_var("EVENTS_TEST_GOOD_PORT", 8080u16), 9000);
    }

    #[test]
    fn test_parse_var_missing_uses_default() {
        std::env::remove_var("EVENTS_TEST_MISSING");
        assert_eq!(parse_var("EVENTS_TEST_MISSING", 30u64), 30);
    }

    #[test]
    fn test_addr_joins_host_and_port() {
        let config = Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
            request_timeout: Duration::from_secs(30),
            cors_allowed_origins: String::new(),
        };
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }
}
