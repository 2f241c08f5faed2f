use pfred_core::error::CoreError;
use pfred_core::workspace::WorkspaceConfig;

/// Server configuration loaded from environment variables.
///
/// Network settings have defaults suitable for local development. The
/// workspace directories have none: the server refuses to start without them.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds. Must exceed the command timeout; the
    /// default is the command timeout plus one minute.
    pub request_timeout_secs: u64,
    /// Run/script directories and execution limits.
    pub workspace: WorkspaceConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `8080`                          |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`         |
    /// | `REQUEST_TIMEOUT_SECS` | `COMMAND_TIMEOUT_SECS` + `60`   |
    ///
    /// See [`WorkspaceConfig::from_env`] for the workspace variables.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let workspace = WorkspaceConfig::from_lookup(&lookup)?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .map_err(|_| CoreError::Config("PORT must be a valid u16".into()))?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let command_timeout_secs = workspace.command_timeout.as_secs();
        let request_timeout_secs: u64 = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map_err(|_| {
                CoreError::Config("REQUEST_TIMEOUT_SECS must be a valid u64".into())
            })?,
            None => command_timeout_secs.checked_add(60).ok_or_else(|| {
                CoreError::Config("COMMAND_TIMEOUT_SECS is too large".into())
            })?,
        };
        // A request cut off first would abandon the script mid-run.
        if request_timeout_secs <= command_timeout_secs {
            return Err(CoreError::Config(format!(
                "REQUEST_TIMEOUT_SECS ({request_timeout_secs}) must exceed \
                 COMMAND_TIMEOUT_SECS ({command_timeout_secs})"
            )));
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            workspace,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: Vec<(&'static str, String)>) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&'static str, String> = pairs.into_iter().collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_command_timeout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().to_str().expect("path").to_string();
        let config = ServerConfig::from_lookup(lookup_from(vec![
            ("RUN_DIR", path.clone()),
            ("SCRIPTS_DIR", path),
            ("COMMAND_TIMEOUT_SECS", "100".into()),
        ]))
        .expect("config");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.request_timeout_secs, 160);
    }

    #[test]
    fn invalid_port_is_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().to_str().expect("path").to_string();
        let result = ServerConfig::from_lookup(lookup_from(vec![
            ("RUN_DIR", path.clone()),
            ("SCRIPTS_DIR", path),
            ("PORT", "http".into()),
        ]));
        assert_matches!(result, Err(CoreError::Config(msg)) if msg.contains("PORT"));
    }

    #[test]
    fn request_timeout_must_outlast_command_timeout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().to_str().expect("path").to_string();
        let lookup = |request: &str| {
            lookup_from(vec![
                ("RUN_DIR", path.clone()),
                ("SCRIPTS_DIR", path.clone()),
                ("COMMAND_TIMEOUT_SECS", "1800".into()),
                ("REQUEST_TIMEOUT_SECS", request.to_string()),
            ])
        };

        assert_matches!(
            ServerConfig::from_lookup(lookup("5")),
            Err(CoreError::Config(msg)) if msg.contains("REQUEST_TIMEOUT_SECS")
        );
        assert_matches!(
            ServerConfig::from_lookup(lookup("1800")),
            Err(CoreError::Config(_))
        );
        let config = ServerConfig::from_lookup(lookup("1801")).expect("config");
        assert_eq!(config.request_timeout_secs, 1801);
    }

    #[test]
    fn huge_command_timeout_is_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().to_str().expect("path").to_string();
        let result = ServerConfig::from_lookup(lookup_from(vec![
            ("RUN_DIR", path.clone()),
            ("SCRIPTS_DIR", path),
            ("COMMAND_TIMEOUT_SECS", u64::MAX.to_string()),
        ]));
        assert_matches!(result, Err(CoreError::Config(msg)) if msg.contains("COMMAND_TIMEOUT_SECS"));
    }

    #[test]
    fn missing_workspace_fails_fast() {
        let result = ServerConfig::from_lookup(lookup_from(vec![("PORT", "9000".into())]));
        assert_matches!(result, Err(CoreError::Config(_)));
    }
}
