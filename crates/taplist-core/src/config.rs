use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, DEFAULT_API_KEY};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every variable has a default; nothing is required.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("TAPLIST_ENV", "development"));
    let log_level = or_default("TAPLIST_LOG_LEVEL", "info");
    let api_base_url = or_default("TAPLIST_API_BASE_URL", "https://lcboapi.com/");
    let api_key = or_default("TAPLIST_API_KEY", DEFAULT_API_KEY);
    let page_url = lookup("TAPLIST_PAGE_URL").ok();
    let request_timeout_secs = parse_u64("TAPLIST_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TAPLIST_USER_AGENT", "taplist/0.1 (seasonal-beers)");
    let exclusions_path = PathBuf::from(or_default(
        "TAPLIST_EXCLUSIONS_PATH",
        "./config/exclusions.yaml",
    ));
    let cookie_jar_path = PathBuf::from(or_default(
        "TAPLIST_COOKIE_JAR_PATH",
        "./.taplist/cookies.json",
    ));

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        api_key,
        page_url,
        request_timeout_secs,
        user_agent,
        exclusions_path,
        cookie_jar_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.api_base_url, "https://lcboapi.com/");
        assert_eq!(cfg.api_key, DEFAULT_API_KEY);
        assert!(cfg.page_url.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "taplist/0.1 (seasonal-beers)");
        assert_eq!(
            cfg.exclusions_path,
            PathBuf::from("./config/exclusions.yaml")
        );
    }

    #[test]
    fn build_app_config_api_key_override() {
        let mut map = HashMap::new();
        map.insert("TAPLIST_API_KEY", "sandbox-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_key, "sandbox-key");
    }

    #[test]
    fn build_app_config_page_url_passthrough() {
        let mut map = HashMap::new();
        map.insert("TAPLIST_PAGE_URL", "https://example.com/beers?apikey=abc");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.page_url.as_deref(),
            Some("https://example.com/beers?apikey=abc")
        );
    }

    #[test]
    fn build_app_config_timeout_override() {
        let mut map = HashMap::new();
        map.insert("TAPLIST_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("TAPLIST_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "TAPLIST_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(TAPLIST_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains(DEFAULT_API_KEY));
        assert!(debug.contains("[redacted]"));
    }
}
