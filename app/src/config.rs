use std::{ops::Deref, sync::Arc};

use anyhow::{Context, Result, ensure};

/// Work factors bcrypt accepts.
const HASH_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

pub struct ConfigInner {
    pub db_url: String,
    pub host: String,
    pub port: u16,
    pub allowed_origin: String,
    /// bcrypt work factor for new password hashes.
    pub password_hash_cost: u32,
    /// Sessions expire after this many days without a request.
    pub session_days: i64,
}

impl ConfigInner {
    /// Rejects values that would only fail later, per request.
    pub fn check(&self) -> Result<()> {
        ensure!(
            HASH_COSTS.contains(&self.password_hash_cost),
            "PASSWORD_HASH_COST must be between {} and {}, got {}",
            HASH_COSTS.start(),
            HASH_COSTS.end(),
            self.password_hash_cost
        );
        ensure!(
            self.session_days > 0,
            "SESSION_DAYS must be positive, got {}",
            self.session_days
        );
        Ok(())
    }
}

#[derive(Clone)]
pub struct Config(Arc<ConfigInner>);

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{key} is not set in .env file"))
}

fn optional<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} is not a valid value: {value}")),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenvy::dotenv().ok();

        let v = ConfigInner {
            db_url: required("DATABASE_URL")?,
            host: required("HOST")?,
            port: required("PORT")?.parse().context("PORT is not a number")?,
            allowed_origin: required("ALLOWED_ORIGIN")?,
            password_hash_cost: optional("PASSWORD_HASH_COST", bcrypt::DEFAULT_COST)?,
            session_days: optional("SESSION_DAYS", 7)?,
        };
        v.check()?;

        Ok(Self(Arc::new(v)))
    }

    pub fn get_server_url(&self) -> String {
        format!("{}:{}", self.0.host, self.0.port)
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
