#![forbid(unsafe_code)]

mod classify;
mod color_mode;
mod error;
mod report;
mod scan;

pub use classify::Classify;
pub use color_mode::ColorMode;
pub use error::Error;
pub use report::Report;
pub use scan::Scan;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration.
///
/// Every field has a default, and the defaults describe the plain
/// `ps -ef` / `java` behavior. A TOML file only needs the keys it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub scan: Scan,
    pub classify: Classify,
    pub report: Report,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file, filling anything it leaves out with defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        Self::figment(Toml::file(path))
    }

    /// Parse config from an in-memory TOML document.
    pub fn from_toml(doc: &str) -> Result<Self, Error> {
        Self::figment(Toml::string(doc))
    }

    fn figment(toml: figment::providers::Data<Toml>) -> Result<Self, Error> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(toml)
            .extract()?;
        Ok(config)
    }
}
