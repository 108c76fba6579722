use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name of the mapping table, the only setting the mapping service reads
    pub table_name: String,

    /// Path of the redb database file, e.g. "data.db"
    pub database_url: String,

    /// Port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let table_name = lookup("TABLE_NAME")
            .context("TABLE_NAME must be set in the environment or .env file")?;

        if table_name.trim().is_empty() {
            anyhow::bail!("TABLE_NAME must not be empty");
        }

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        Ok(Self {
            table_name,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "data.db".into()),
            port,
        })
    }
}
