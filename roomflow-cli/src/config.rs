use anyhow::{Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use roomflow_core::FallbackProbabilities;

use crate::state::ensure_roomflow_home;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub property: PropertySection,
    pub scheduling: SchedulingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySection {
    pub property_id: String,
    /// IANA name; scheduled times are computed property-local, stored UTC.
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingSection {
    pub window_days: u32,
    pub slot_minutes: i64,
    pub checkout_probability: f64,
    pub checkin_probability: f64,
    pub as_needed_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            property: PropertySection {
                property_id: "main".to_string(),
                timezone: "America/Chicago".to_string(),
            },
            scheduling: SchedulingSection {
                window_days: 7,
                slot_minutes: 45,
                checkout_probability: 0.30,
                checkin_probability: 0.20,
                as_needed_probability: 0.10,
            },
        }
    }
}

impl Config {
    pub fn timezone(&self) -> Result<Tz> {
        roomflow_core::parse_tz(&self.property.timezone)
    }

    pub fn probabilities(&self) -> FallbackProbabilities {
        FallbackProbabilities {
            checkout: self.scheduling.checkout_probability,
            checkin: self.scheduling.checkin_probability,
            as_needed: self.scheduling.as_needed_probability,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_roomflow_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
