use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SITE_ADDR must be a socket address like 127.0.0.1:3000, got {0:?}")]
    InvalidAddr(String),
    #[error("site root {0} does not exist; build the page with `trunk build` first")]
    MissingSiteRoot(PathBuf),
}

/// Where the static host listens and what it serves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub site_addr: SocketAddr,
    pub site_root: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_SITE_ADDR.into());
        let site_addr = addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;

        let site_root = PathBuf::from(lookup("SITE_ROOT").unwrap_or_else(|| DEFAULT_SITE_ROOT.into()));
        if !site_root.is_dir() {
            return Err(ConfigError::MissingSiteRoot(site_root));
        }

        Ok(Self {
            site_addr,
            site_root,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_root.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a HashMap<&'a str, String>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn reads_addr_and_root() {
        let dir = tempfile::tempdir().unwrap();
        let vars = HashMap::from([
            ("SITE_ADDR", "0.0.0.0:8080".to_string()),
            ("SITE_ROOT", dir.path().display().to_string()),
        ]);
        let config = ServerConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.site_addr.port(), 8080);
        assert_eq!(config.index_file(), dir.path().join("index.html"));
    }

    #[test]
    fn default_addr_is_local() {
        let dir = tempfile::tempdir().unwrap();
        let vars = HashMap::from([("SITE_ROOT", dir.path().display().to_string())]);
        let config = ServerConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.site_addr.to_string(), DEFAULT_SITE_ADDR);
    }

    #[test]
    fn rejects_bad_addr() {
        let vars = HashMap::from([("SITE_ADDR", "localhost".to_string())]);
        let err = ServerConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr(a) if a == "localhost"));
    }

    #[test]
    fn rejects_missing_root() {
        let vars = HashMap::from([("SITE_ROOT", "/definitely/not/here".to_string())]);
        let err = ServerConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSiteRoot(_)));
    }
}
