use crate::error::config::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://pet-adoption-api-v2.vercel.app";
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Application configuration.
///
/// The client runs in the browser where there is no process environment, so
/// values are captured from the build environment (`PAWS_API_URL`,
/// `PAWS_PAGE_SIZE`) at compile time and fall back to defaults when unset.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(option_env!("PAWS_API_URL"), option_env!("PAWS_PAGE_SIZE"))
    }

    /// Build a configuration from raw variable values, `None` meaning unset.
    pub fn from_vars(api_url: Option<&str>, page_size: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = match api_url.map(str::trim) {
            None | Some("") => DEFAULT_API_BASE_URL.to_string(),
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "PAWS_API_URL".to_string(),
                    reason: format!("expected an http(s) URL, got {:?}", url),
                })
            }
        };

        let page_size = match page_size.map(str::trim) {
            None | Some("") => DEFAULT_PAGE_SIZE,
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "PAWS_PAGE_SIZE".to_string(),
                        reason: "page size must be greater than zero".to_string(),
                    })
                }
                Ok(size) => size,
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "PAWS_PAGE_SIZE".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            api_base_url,
            page_size,
        })
    }
}
