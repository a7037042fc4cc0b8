use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub warehouse: WarehouseConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WarehouseConfig {
    /// Connection URL understood by sea-orm (sqlite://, postgres://)
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

fn default_max_connections() -> u32 {
    5
}

/// Environment variable that replaces `warehouse.url`
pub const WAREHOUSE_URL_ENV: &str = "WAREHOUSE_URL";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[warehouse]
url = "sqlite://target/db/warehouse.db?mode=rwc"
max_connections = 5

[server]
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `WAREHOUSE_URL` overrides the configured URL in both cases.
pub fn load_config() -> anyhow::Result<Config> {
    let config = read_config_file()?;
    Ok(apply_url_override(
        config,
        std::env::var(WAREHOUSE_URL_ENV).ok(),
    ))
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_url_override(mut config: Config, url: Option<String>) -> Config {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        tracing::info!("Warehouse URL taken from {}", WAREHOUSE_URL_ENV);
        config.warehouse.url = url;
    }
    config
}
