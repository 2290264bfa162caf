use std::net::SocketAddr;
use std::path::PathBuf;

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
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL the product list (`data.json`) is served under.
    pub catalog_base_url: String,
    /// Root URL holding `campaigns.json`. `None` means "origin of the catalog base".
    pub site_root_url: Option<String>,
    /// Destination phone number for quote requests, digits only.
    pub whatsapp_number: String,
    pub store_name: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub search_debounce_ms: u64,
    pub reload_delay_ms: u64,
    pub theme_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog_base_url", &self.catalog_base_url)
            .field("site_root_url", &self.site_root_url)
            .field("whatsapp_number", &"[redacted]")
            .field("store_name", &self.store_name)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("search_debounce_ms", &self.search_debounce_ms)
            .field("reload_delay_ms", &self.reload_delay_ms)
            .field("theme_path", &self.theme_path)
            .finish()
    }
}
