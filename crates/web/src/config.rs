use anyhow::{Context, Result, anyhow};
use storage::ConnectionSettings;
use storage::models::UpsertPolicy;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3007;
const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database: ConnectionSettings,
    pub upsert_policy: UpsertPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("Cannot load {key} env variable"))
        };

        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a number")?,
            None => DEFAULT_PORT,
        };

        let db_port = match lookup("DB_PORT") {
            Some(port) => port.parse().context("DB_PORT must be a number")?,
            None => DEFAULT_DB_PORT,
        };

        let upsert_policy = match lookup("SCORE_UPSERT_POLICY") {
            Some(policy) => policy.parse::<UpsertPolicy>().map_err(|e| anyhow!(e))?,
            None => UpsertPolicy::default(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database: ConnectionSettings {
                host: required("DB_HOST")?,
                port: db_port,
                user: required("DB_USER")?,
                password: lookup("DB_PASSWORD").unwrap_or_default(),
                database: required("DB_DATABASE")?,
            },
            upsert_policy,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
