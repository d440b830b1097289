use std::env;

/// Default iptv-org dataset endpoints
pub const DEFAULT_CHANNELS_URL: &str = "https://iptv-org.github.io/api/channels.json";
pub const DEFAULT_STREAMS_URL: &str = "https://iptv-org.github.io/api/streams.json";
pub const DEFAULT_LOGOS_URL: &str = "https://iptv-org.github.io/api/logos.json";

/// The three remote JSON datasets the catalog is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEndpoints {
    pub channels: String,
    pub streams: String,
    pub logos: String,
}

impl Default for DatasetEndpoints {
    fn default() -> Self {
        Self {
            channels: DEFAULT_CHANNELS_URL.to_string(),
            streams: DEFAULT_STREAMS_URL.to_string(),
            logos: DEFAULT_LOGOS_URL.to_string(),
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub node_env: String,

    // Datasets
    pub endpoints: DatasetEndpoints,
    pub fetch_timeout_ms: u64,
    pub user_agent: String,

    // Catalog
    pub default_channel_limit: usize,

    // Admin
    pub admin_key: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            node_env: env::var("NODE_ENV").unwrap_or_else(|_| "development".to_string()),

            // Datasets
            endpoints: DatasetEndpoints {
                channels: env::var("CHANNELS_URL")
                    .unwrap_or_else(|_| DEFAULT_CHANNELS_URL.to_string()),
                streams: env::var("STREAMS_URL")
                    .unwrap_or_else(|_| DEFAULT_STREAMS_URL.to_string()),
                logos: env::var("LOGOS_URL").unwrap_or_else(|_| DEFAULT_LOGOS_URL.to_string()),
            },
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .unwrap_or(30_000), // 30 seconds
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| format!("iptv-catalog/{}", env!("CARGO_PKG_VERSION"))),

            // Catalog
            default_channel_limit: env::var("DEFAULT_CHANNEL_LIMIT")
                .unwrap_or_else(|_| "200".to_string())
                .parse()
                .unwrap_or(200),

            // Admin
            admin_key: env::var("ADMIN_KEY").unwrap_or_else(|_| "admin123".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
