//! Service config loader (environment, strict parsing).
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory. Variables already set in the environment
//! win over the file. A `.env` that cannot be parsed is only fatal when the
//! environment does not already provide `PORT`.

pub mod schema;

use std::path::PathBuf;
use std::str::FromStr;

use fibsvc_core::error::{FibsvcError, Result};

pub use schema::{
    ServiceConfig, ENV_HOST, ENV_MAX_RANDOM_NUMBER, ENV_METRIC_DECIMAL_PLACES, ENV_PORT,
};

pub fn load_from_env() -> Result<ServiceConfig> {
    let lookup = |key: &str| std::env::var(key).ok();
    check_dotenv(dotenvy::dotenv(), &lookup)?;
    load_from_lookup(lookup)
}

/// Decide whether a `.env` load outcome stops startup.
pub fn check_dotenv<F>(
    loaded: std::result::Result<PathBuf, dotenvy::Error>,
    lookup: &F,
) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    match loaded {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) if lookup(ENV_PORT).is_some_and(|v| !v.is_empty()) => {
            tracing::warn!(error = %e, "ignoring unreadable .env, using process environment");
            Ok(())
        }
        Err(e) => Err(FibsvcError::Config(format!("read .env failed: {e}"))),
    }
}

/// Build and validate a config from any key lookup (tests pass a map).
pub fn load_from_lookup<F>(lookup: F) -> Result<ServiceConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = ServiceConfig {
        host: optional(&lookup, ENV_HOST)?.unwrap_or_else(schema::default_host),
        port: required(&lookup, ENV_PORT)?,
        max_random_number: required(&lookup, ENV_MAX_RANDOM_NUMBER)?,
        metric_decimal_places: optional(&lookup, ENV_METRIC_DECIMAL_PLACES)?,
    };
    cfg.validate()?;
    Ok(cfg)
}

fn required<T, F>(lookup: &F, key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key)?
        .ok_or_else(|| FibsvcError::Config(format!("{key} is required")))
}

/// Absent and empty values both mean "not set".
fn optional<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else { return Ok(None) };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| FibsvcError::Config(format!("{key} is invalid ({raw:?}): {e}")))
}
