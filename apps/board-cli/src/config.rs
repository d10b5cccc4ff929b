//! CLI configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use board_client::pagination::DEFAULT_PAGE_SIZE;

/// Where the board view sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// The API server at this base URL.
    Http(String),
    /// In-process board over a local JSON file.
    Local(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub backend: Backend,
    pub page_size: usize,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = match lookup("BOARD_DATA_FILE").filter(|p| !p.trim().is_empty()) {
            Some(path) => Backend::Local(PathBuf::from(path)),
            None => Backend::Http(
                lookup("BOARD_API_URL").unwrap_or_else(|| "http://localhost:4000".to_string()),
            ),
        };

        Self {
            backend,
            page_size: lookup("BOARD_PAGE_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_server() {
        let config = CliConfig::from_lookup(|_| None);
        assert_eq!(config.backend, Backend::Http("http://localhost:4000".into()));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_data_file_selects_local_backend() {
        let config = CliConfig::from_lookup(|key| match key {
            "BOARD_DATA_FILE" => Some("posts.json".into()),
            "BOARD_API_URL" => Some("http://ignored".into()),
            "BOARD_PAGE_SIZE" => Some("10".into()),
            _ => None,
        });
        assert_eq!(config.backend, Backend::Local(PathBuf::from("posts.json")));
        assert_eq!(config.page_size, 10);
    }
}
