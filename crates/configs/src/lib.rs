use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Which recipe store the server is composed with.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StoreBackend {
    #[default]
    Memory,
    Database,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Ok(Self::Memory),
            "database" | "db" | "sql" => Ok(Self::Database),
            other => Err(anyhow!("unknown store backend `{other}` (expected memory|database)")),
        }
    }
}

/// How the create path turns a submitted recipe name into its key.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum KeyPolicy {
    /// Slug of the name, e.g. `Tomato Soup` -> `tomato-soup`.
    Slug,
    /// The name verbatim; matches rows written by the legacy relational service.
    RawName,
}

impl std::str::FromStr for KeyPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slug" => Ok(Self::Slug),
            "raw-name" | "raw_name" | "raw" => Ok(Self::RawName),
            other => Err(anyhow!("unknown key policy `{other}` (expected slug|raw-name)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    /// Unset means the backend's default, see [`StoreConfig::effective_key_policy`].
    #[serde(default)]
    pub key_policy: Option<KeyPolicy>,
}

impl StoreConfig {
    pub fn effective_key_policy(&self) -> KeyPolicy {
        self.key_policy.unwrap_or(match self.backend {
            StoreBackend::Memory => KeyPolicy::Slug,
            StoreBackend::Database => KeyPolicy::RawName,
        })
    }

    /// False when the table's only name column holds a slug, so the submitted
    /// display name is lost on create (`database` backend with `slug` keys).
    pub fn stores_display_name(&self) -> bool {
        !(self.backend == StoreBackend::Database && self.effective_key_policy() == KeyPolicy::Slug)
    }
}

pub fn config_path() -> String {
    common::env::var_non_empty("CONFIG_PATH").unwrap_or_else(|| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`) when present, otherwise start from
    /// defaults; then apply env overrides and validate.
    pub fn load_and_validate() -> Result<Self> {
        Self::load_with(&config_path(), common::env::var_non_empty)
    }

    /// Same as [`AppConfig::load_and_validate`] with an explicit file path and
    /// variable lookup. The lookup must return `None` for unset or blank values.
    pub fn load_with<F>(path: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = if Path::new(path).exists() {
            load_from_file(path)?
        } else {
            tracing::info!(%path, "config file not found; using defaults and environment");
            AppConfig::default()
        };
        cfg.apply_overrides(&env)?;
        cfg.normalize_and_validate_with(&env)?;
        Ok(cfg)
    }

    /// `SERVER_HOST`, `SERVER_PORT`, `RECIPE_STORE`, `RECIPE_KEY_POLICY` win over the file.
    /// Blank variables are ignored.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(&common::env::var_non_empty)
    }

    fn apply_overrides<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = env("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("SERVER_PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| anyhow!("SERVER_PORT is not a valid port: {port}"))?;
        }
        if let Some(backend) = env("RECIPE_STORE") {
            self.store.backend = backend.parse()?;
        }
        if let Some(policy) = env("RECIPE_KEY_POLICY") {
            self.store.key_policy = Some(policy.parse()?);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_with(&common::env::var_non_empty)
    }

    fn normalize_and_validate_with<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.server.normalize()?;
        // fall back to DATABASE_URL when the file leaves the url empty
        if self.database.url.trim().is_empty() {
            if let Some(url) = env("DATABASE_URL") {
                self.database.url = url;
            }
        }
        if self.store.backend == StoreBackend::Database {
            self.database.validate()?;
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).filter(|v| !v.trim().is_empty()).cloned()
    }

    const NO_FILE: &str = "/nonexistent/recipe-service/config.toml";

    #[test]
    fn empty_file_gives_memory_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
        assert_eq!(cfg.store.effective_key_policy(), KeyPolicy::Slug);
        assert_eq!(cfg.database.max_connections, 10);
    }

    #[test]
    fn database_backend_defaults_to_raw_name_keys() {
        let cfg = parse(
            r#"
            [store]
            backend = "database"

            [database]
            url = "postgres://localhost/recipes"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.store.backend, StoreBackend::Database);
        assert_eq!(cfg.store.effective_key_policy(), KeyPolicy::RawName);
        assert!(cfg.database.validate().is_ok());
    }

    #[test]
    fn explicit_key_policy_wins() {
        let cfg = parse("[store]\nbackend = \"database\"\nkey_policy = \"slug\"\n").unwrap();
        assert_eq!(cfg.store.effective_key_policy(), KeyPolicy::Slug);
    }

    #[test]
    fn rejects_bad_database_settings() {
        let mut db = DatabaseConfig { url: "mysql://root@/web".into(), ..Default::default() };
        assert!(db.validate().is_err());
        db.url = "sqlite::memory:".into();
        assert!(db.validate().is_ok());
        db.min_connections = 5;
        db.max_connections = 1;
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = parse("[server]\nhost = \"\"\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn parses_backend_and_policy_names() {
        assert_eq!("DB".parse::<StoreBackend>().unwrap(), StoreBackend::Database);
        assert_eq!("raw-name".parse::<KeyPolicy>().unwrap(), KeyPolicy::RawName);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = AppConfig::load_with(NO_FILE, lookup(&[])).unwrap();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
        assert!(cfg.database.url.is_empty());
    }

    #[test]
    fn env_overrides_win_over_defaults() {
        let env = lookup(&[
            ("SERVER_HOST", "0.0.0.0"),
            ("SERVER_PORT", " 9090 "),
            ("RECIPE_STORE", "database"),
            ("RECIPE_KEY_POLICY", "slug"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]);
        let cfg = AppConfig::load_with(NO_FILE, env).unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9090");
        assert_eq!(cfg.store.backend, StoreBackend::Database);
        assert_eq!(cfg.store.effective_key_policy(), KeyPolicy::Slug);
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let env = lookup(&[("RECIPE_STORE", ""), ("RECIPE_KEY_POLICY", "  "), ("SERVER_PORT", "")]);
        let cfg = AppConfig::load_with(NO_FILE, env).unwrap();
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
        assert_eq!(cfg.store.key_policy, None);
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn blank_process_env_does_not_fail_startup() {
        std::env::set_var("RECIPE_STORE", "");
        std::env::set_var("RECIPE_KEY_POLICY", "   ");
        let mut cfg = AppConfig::default();
        cfg.apply_env_overrides().unwrap();
        assert_eq!(cfg.store.backend, StoreBackend::Memory);
        assert_eq!(cfg.store.key_policy, None);
    }

    #[test]
    fn invalid_overrides_are_errors() {
        let err = AppConfig::load_with(NO_FILE, lookup(&[("RECIPE_STORE", "redis")])).unwrap_err();
        assert!(err.to_string().contains("redis"));
        let err = AppConfig::load_with(NO_FILE, lookup(&[("SERVER_PORT", "http")])).unwrap_err();
        assert_eq!(err.to_string(), "SERVER_PORT is not a valid port: http");
    }

    #[test]
    fn database_url_fills_in_only_when_file_leaves_it_empty() {
        let env = lookup(&[("DATABASE_URL", "postgres://env/recipes")]);

        let mut cfg = parse("[store]\nbackend = \"database\"\n").unwrap();
        cfg.normalize_and_validate_with(&env).unwrap();
        assert_eq!(cfg.database.url, "postgres://env/recipes");

        let mut cfg =
            parse("[store]\nbackend = \"database\"\n[database]\nurl = \"sqlite::memory:\"\n").unwrap();
        cfg.normalize_and_validate_with(&env).unwrap();
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn database_backend_without_url_is_rejected() {
        let err = AppConfig::load_with(NO_FILE, lookup(&[("RECIPE_STORE", "database")])).unwrap_err();
        assert!(err.to_string().contains("database.url"));
    }

    #[test]
    fn slug_keys_on_database_drop_the_display_name() {
        let cfg = parse("[store]\nbackend = \"database\"\nkey_policy = \"slug\"\n").unwrap();
        assert!(!cfg.store.stores_display_name());
        let cfg = parse("[store]\nbackend = \"database\"\n").unwrap();
        assert!(cfg.store.stores_display_name());
        let cfg = parse("").unwrap();
        assert!(cfg.store.stores_display_name());
    }
}
