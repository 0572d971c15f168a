use dotenv::dotenv;
use std::env;
use tracing::warn;

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Carica la configurazione dalle variabili d'ambiente (anche da .env)
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let api_url = env::var("ROSHIFIT_API_URL").unwrap_or_else(|_| {
            warn!("ROSHIFIT_API_URL not set, using {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });

        let timeout_secs = env::var("ROSHIFIT_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "Invalid ROSHIFIT_TIMEOUT_SECS: must be a positive number".to_string())?;

        Ok(Self::new(api_url, timeout_secs))
    }

    pub fn new(api_url: impl Into<String>, timeout_secs: u64) -> Self {
        // niente slash finale: i path delle rotte iniziano sempre con '/'
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_removed() {
        let config = ClientConfig::new("http://gym.local:8080/", 5);
        assert_eq!(config.api_url, "http://gym.local:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_default_points_to_local_server() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://127.0.0.1:3000");
        assert_eq!(config.timeout_secs, 10);
    }
}
