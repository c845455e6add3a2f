//! Shared utilities for commands
//!
//! This module contains:
//! - `load_config` - Resolve the active configuration
//! - `load_snapshot` - Read a snapshot file
//! - `parse_instant` - Parse `--as-of` / `--at` values

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use nestegg_core::{Config, Snapshot};

pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    Config::load(config_path).context("Failed to load config")
}

pub fn load_snapshot(input: &Path) -> Result<Snapshot> {
    Snapshot::load(input)
        .with_context(|| format!("Failed to read snapshot: {}", input.display()))
}

/// Parse `YYYY-MM-DD` (midnight UTC) or an RFC 3339 timestamp
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD or RFC 3339)", s))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// `--as-of` value or now
pub fn resolve_as_of(as_of: Option<&str>) -> Result<DateTime<Utc>> {
    as_of
        .map(parse_instant)
        .transpose()
        .map(|ts| ts.unwrap_or_else(Utc::now))
}
