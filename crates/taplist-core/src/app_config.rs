use std::path::PathBuf;

/// Default inventory API key, valid against the sandbox deployment.
/// Overridable via `TAPLIST_API_KEY` or an `apikey` query parameter on the
/// configured page URL.
pub const DEFAULT_API_KEY: &str =
    "MDpmZDY3NjczYy1lZjY5LTExZTctYTIxYS1mMzlmNjE4MjIwNTI6ejZiRkxWeWNpdU0zUXNNWnBRMHdxT3lOS2JFQjR3OFFkNUlh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the inventory/store API.
    pub api_base_url: String,
    /// Bearer-style API key sent in the `Authorization` header.
    pub api_key: String,
    /// URL of the hosting page, when known. An `apikey` query parameter on
    /// this URL overrides `api_key` for sandbox testing.
    pub page_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// YAML file listing catalog ids to suppress from display.
    pub exclusions_path: PathBuf,
    /// JSON file the cookie jar is persisted to between runs.
    pub cookie_jar_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &"[redacted]")
            .field("page_url", &self.page_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("exclusions_path", &self.exclusions_path)
            .field("cookie_jar_path", &self.cookie_jar_path)
            .finish()
    }
}
