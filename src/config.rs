use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// JSON file with raw step-delta data points.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Connect (and read once) as soon as the service starts.
    #[serde(default = "default_connect_on_start")]
    pub connect_on_start: bool,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_on_start: default_connect_on_start(),
            read_timeout_secs: default_read_timeout_secs(),
        }
    }
}

fn default_connect_on_start() -> bool {
    true
}

fn default_read_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(!self.source.path.is_empty(), "source.path must be non-empty");
        anyhow::ensure!(
            self.session.read_timeout_secs > 0,
            "session.read_timeout_secs must be > 0, got {}",
            self.session.read_timeout_secs
        );
        Ok(())
    }
}
