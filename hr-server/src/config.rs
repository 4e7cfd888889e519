//! Server configuration

/// Server configuration, loaded from environment variables
///
/// | Environment variable | Default | Purpose |
/// |----------------------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | GEMINI_API_KEY | unset | Gemini credential; assistant is disabled without it |
/// | GEMINI_BASE_URL | https://generativelanguage.googleapis.com | Override for tests/proxies |
/// | COMPANIES_PATH | unset | JSON roster file; built-in roster when unset |
/// | SEED_EMPLOYEES | true | Seed the directory with the fixture roster |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Gemini API key. None leaves the assistant unconfigured; the two
    /// assistant endpoints then fail with ServiceUnavailable.
    pub gemini_api_key: Option<String>,
    /// Gemini REST base URL
    pub gemini_base_url: String,
    /// Optional path to a JSON company roster
    pub companies_path: Option<String>,
    /// Whether to seed the directory with the fixture employees
    pub seed_employees: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|s| !s.is_empty()),
            gemini_base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            companies_path: std::env::var("COMPANIES_PATH").ok().filter(|s| !s.is_empty()),
            seed_employees: std::env::var("SEED_EMPLOYEES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    /// Test-friendly configuration: built-in roster, no seeded employees,
    /// no assistant credential.
    fn default() -> Self {
        Self {
            http_port: 0,
            environment: "development".into(),
            gemini_api_key: None,
            gemini_base_url: "https://generativelanguage.googleapis.com".into(),
            companies_path: None,
            seed_employees: false,
        }
    }
}
