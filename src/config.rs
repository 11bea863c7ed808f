use crate::generator::DEFAULT_FALLBACK_COUNT;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub catalog_path: Option<String>,
    pub fallback_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            database_url: None,
            catalog_path: None,
            fallback_count: DEFAULT_FALLBACK_COUNT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fallback_count = match get("FALLBACK_SURVEY_COUNT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!(
                        "Ignoring FALLBACK_SURVEY_COUNT={:?}, using {}",
                        raw,
                        DEFAULT_FALLBACK_COUNT
                    );
                    DEFAULT_FALLBACK_COUNT
                }
            },
            None => DEFAULT_FALLBACK_COUNT,
        };

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            database_url: get("DATABASE_URL"),
            catalog_path: get("CATALOG_PATH"),
            fallback_count,
        }
    }
}
