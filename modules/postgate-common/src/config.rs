use std::env;

/// Gateway configuration loaded from environment variables.
/// Every setting has a default matching the fixed addresses the gateway
/// was written against, so a bare `from_env()` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the downstream board service.
    pub board_base_url: String,

    // Gateway HTTP server
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a value fails to parse.
    pub fn from_env() -> Self {
        Self {
            board_base_url: env::var("BOARD_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .expect("API_PORT must be a number"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_addresses() {
        // Only meaningful when the env vars are unset, which is the
        // normal state for the test runner.
        if env::var("BOARD_BASE_URL").is_err() && env::var("API_PORT").is_err() {
            let config = Config::from_env();
            assert_eq!(config.board_base_url, "http://localhost:3000");
            assert_eq!(config.api_port, 4000);
        }
    }
}
