//! Frontend configuration module
//!
//! Provides build-time configuration for the backend API location.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the TaskDeck REST API.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TASKDECK_API_URL")
                .unwrap_or("http://localhost:8000")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), config.api_base_url);
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
