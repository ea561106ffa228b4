use std::path::PathBuf;
use std::time::Duration;

pub const API_KEY_ENV: &str = "API_NINJAS_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com";
pub const DEFAULT_OUTPUT: &str = "animals.html";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a single run. Read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Defaults plus the API key from the environment (or a local `.env`).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::default().with_api_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Blank keys are treated as missing.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = non_blank(api_key);
        self
    }

    /// A key given on the command line wins over the one already loaded,
    /// unless it is blank.
    pub fn with_cli_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = non_blank(api_key).or(self.api_key);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Full URL of the animals endpoint.
    pub fn animals_url(&self) -> String {
        format!("{}/v1/animals", self.base_url.trim_end_matches('/'))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
