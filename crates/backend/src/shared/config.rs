use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Where the sales table comes from. The two sources are exclusive: one of
/// them is exercised exactly once, at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// "synthetic" or "csv"
    pub source: String,
    /// Seed for the synthetic generator
    pub seed: u64,
    /// Row count for the synthetic generator
    pub rows: usize,
    /// CSV file path, relative paths resolve against the working directory
    pub csv_path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 8050

[dataset]
source = "synthetic"
seed = 42
rows = 500
csv_path = "dados.csv"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Effective listen port: the PORT environment variable wins over config.toml
pub fn effective_port(config: &Config) -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(config.server.port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dataset.source, "synthetic");
        assert_eq!(config.dataset.seed, 42);
        assert_eq!(config.dataset.rows, 500);
        assert_eq!(config.dataset.csv_path, "dados.csv");
    }
}
