/// Deployment tier for the running process.
///
/// Only `Live` surfaces the full store estate; every other tier restricts
/// the pipeline to the fixed test-location subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Live,
    Staging,
    Test,
    Dev,
}

impl AppEnv {
    /// Parses a tier name case-insensitively. Unrecognized values fall back
    /// to `Dev` so they never widen the pipeline to the live estate.
    #[must_use]
    pub fn parse(s: &str) -> AppEnv {
        match s.to_lowercase().as_str() {
            "live" => AppEnv::Live,
            "staging" => AppEnv::Staging,
            "test" => AppEnv::Test,
            _ => AppEnv::Dev,
        }
    }

    #[must_use]
    pub fn is_live(self) -> bool {
        self == AppEnv::Live
    }
}

impl std::fmt::Display for AppEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppEnv::Live => write!(f, "live"),
            AppEnv::Staging => write!(f, "staging"),
            AppEnv::Test => write!(f, "test"),
            AppEnv::Dev => write!(f, "dev"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: AppEnv,
    pub log_level: String,
    /// Base host of the JDNA locations service, without scheme.
    pub locations_api_url: String,
    pub locations_api_client_id: String,
    pub locations_api_client_secret: String,
    pub locations_api_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("locations_api_url", &self.locations_api_url)
            .field("locations_api_client_id", &"[redacted]")
            .field("locations_api_client_secret", &"[redacted]")
            .field(
                "locations_api_timeout_secs",
                &self.locations_api_timeout_secs,
            )
            .finish()
    }
}
