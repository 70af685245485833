use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Host settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    /// Trunk output: `index.html` plus the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
    /// Full URL sign-up requests are relayed to. Unset disables sign up.
    pub auth_backend_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned()),
            port,
            dist_dir: lookup("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../dist")),
            assets_dir: lookup("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
            auth_backend_url: lookup("AUTH_BACKEND_URL").filter(|url| !url.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let c = config(&[]).unwrap();
        assert_eq!(c.bind_addr, "127.0.0.1");
        assert_eq!(c.port, 3000);
        assert!(c.dist_dir.ends_with("dist"));
        assert!(c.assets_dir.ends_with("assets"));
        assert_eq!(c.auth_backend_url, None);
    }

    #[test]
    fn overrides() {
        let c = config(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "8080"),
            ("DIST_DIR", "/srv/dist"),
            ("AUTH_BACKEND_URL", "http://auth.internal/signup"),
        ])
        .unwrap();
        assert_eq!(c.bind_addr, "0.0.0.0");
        assert_eq!(c.port, 8080);
        assert_eq!(c.dist_dir, PathBuf::from("/srv/dist"));
        assert_eq!(c.auth_backend_url.as_deref(), Some("http://auth.internal/signup"));
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = config(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn blank_backend_counts_as_unset() {
        let c = config(&[("AUTH_BACKEND_URL", "  ")]).unwrap();
        assert_eq!(c.auth_backend_url, None);
    }
}
