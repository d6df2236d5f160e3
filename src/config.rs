//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for hello-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// SQLite database URL (default: `"sqlite://hello.db?mode=rwc"`).
    /// Any sqlx-compatible connection string works; use
    /// `"sqlite::memory:"` for an ephemeral store.
    pub database_url: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Serve Swagger UI at `/swagger-ui` (default `true`).
    pub enable_swagger: bool,

    /// Comma-separated CORS origin allow-list. Wildcard when unset.
    pub cors_allowed_origins: Option<String>,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("HELLO_BIND", "0.0.0.0:3000"),
            database_url: env_or("HELLO_DATABASE_URL", "sqlite://hello.db?mode=rwc"),
            log_level: env_or("HELLO_LOG", "info"),
            log_json: env_flag("HELLO_LOG_JSON", false),
            enable_swagger: env_flag("HELLO_ENABLE_SWAGGER", true),
            cors_allowed_origins: std::env::var("HELLO_CORS_ORIGINS").ok(),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        // Not all environments are clean, so only check the fields no test
        // or CI setup is likely to override.
        let cfg = Config::from_env();
        assert!(!cfg.bind_address.is_empty());
        assert!(cfg.database_url.starts_with("sqlite:"));
    }
}
