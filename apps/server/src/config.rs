use std::path::PathBuf;

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: String,
    /// Directory to dump `openapi.yaml` into at startup, if set.
    pub openapi_out: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind: lookup("REPOS_BIND").unwrap_or_else(|| "127.0.0.1:3333".into()),
            openapi_out: lookup("REPOS_OPENAPI_OUT")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_lookup(|_| None);
        assert_eq!(cfg.bind, "127.0.0.1:3333");
        assert_eq!(cfg.openapi_out, None);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(|key| match key {
            "REPOS_BIND" => Some("0.0.0.0:8080".into()),
            "REPOS_OPENAPI_OUT" => Some("openapi/server".into()),
            _ => None,
        });
        assert_eq!(cfg.bind, "0.0.0.0:8080");
        assert_eq!(cfg.openapi_out, Some(PathBuf::from("openapi/server")));
    }

    #[test]
    fn blank_openapi_dir_is_ignored() {
        let cfg = ServerConfig::from_lookup(|key| (key == "REPOS_OPENAPI_OUT").then(|| " ".into()));
        assert_eq!(cfg.openapi_out, None);
    }
}
