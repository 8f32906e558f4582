use fetcher::{FetchClient, FetchConfig};

const SESSION_PATH: &str = "/api/session";

/// Build-time configuration for the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin of the JSON API, without a trailing slash.
    pub api_base_url: String,
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Read `API_BASE_URL` (set at build time), falling back to the page's
    /// own origin.
    pub fn load() -> Self {
        let api_base_url = option_env!("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .or_else(|| web_sys::window()?.location().origin().ok())
            .unwrap_or_default();

        AppConfig {
            api_base_url,
            fetch: FetchConfig::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }

    pub fn session_url(&self) -> String {
        self.url(SESSION_PATH)
    }

    pub fn client(&self) -> FetchClient {
        FetchClient::new(self.fetch)
    }
}
