use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_BCRYPT_COST: u32 = 10;
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;
/// Ten years.
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 366 * 10;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime. `None` issues tokens without an `exp` claim.
    pub ttl_minutes: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub bcrypt_cost: u32,
    pub cors_origin: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let secret = var("JWT_SECRET")
            .or_else(|| var("SECRET_KEY"))
            .context("JWT_SECRET must be set")?;

        let ttl_minutes = match var("JWT_TTL_MINUTES") {
            Some(v) => {
                let minutes = v
                    .parse::<i64>()
                    .with_context(|| format!("JWT_TTL_MINUTES is not a number: {v}"))?;
                if !(1..=MAX_TTL_MINUTES).contains(&minutes) {
                    bail!("JWT_TTL_MINUTES must be between 1 and {MAX_TTL_MINUTES}");
                }
                Some(minutes)
            }
            None => None,
        };

        let bcrypt_cost = match var("BCRYPT_COST") {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("BCRYPT_COST is not a number: {v}"))?,
            None => DEFAULT_BCRYPT_COST,
        };
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            bail!(
                "BCRYPT_COST must be between {} and {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end()
            );
        }

        let port = match var("APP_PORT").or_else(|| var("PORT")) {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("invalid port: {v}"))?,
            None => 8080,
        };

        Ok(Self {
            database_url,
            jwt: JwtConfig { secret, ttl_minutes },
            bcrypt_cost,
            cors_origin: var("CORS_ORIGIN"),
            host: var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
        })
    }
}
