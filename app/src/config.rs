/// Base used when the build did not set `VITE_API_BASE`. Matches the path the bundled `api`
/// server mounts the notices under.
const DEFAULT_API_BASE: &str = "/api";

/// Configuration handed down the component tree via context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix of the notices endpoint, `{api_base}/notices` is fetched.
    pub api_base: String,
}

impl AppConfig {
    /// Read the configuration baked in at build time.
    pub fn from_build_env() -> Self {
        Self::with_base(option_env!("VITE_API_BASE"))
    }

    fn with_base(base: Option<&str>) -> Self {
        let api_base = base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        Self { api_base }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base(None)
    }
}
