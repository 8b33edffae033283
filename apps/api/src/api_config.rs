use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crowdfund_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub cookie_secure: bool,
    pub session_idle_minutes: i64,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = parse_env("API_PORT", 3001_u16)?;
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        let session_idle_minutes = parse_env("SESSION_IDLE_MINUTES", 30_i64)?;
        if session_idle_minutes <= 0 {
            return Err(AppError::Validation(
                "SESSION_IDLE_MINUTES must be a positive number of minutes".to_owned(),
            ));
        }

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            cookie_secure,
            session_idle_minutes,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;

        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_env<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name} '{value}': {error}"))),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    fn config(api_host: &str) -> ApiConfig {
        ApiConfig {
            api_host: api_host.to_owned(),
            api_port: 3001,
            frontend_url: "http://localhost:3000".to_owned(),
            cookie_secure: false,
            session_idle_minutes: 30,
        }
    }

    #[test]
    fn socket_address_combines_host_and_port() {
        let address = config("127.0.0.1")
            .socket_address()
            .unwrap_or_else(|error| panic!("address should parse: {error}"));

        assert_eq!(address.to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn socket_address_rejects_hostnames() {
        let result = config("localhost").socket_address();

        assert!(result.is_err());
    }
}
