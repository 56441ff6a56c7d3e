//! Site configuration.
//!
//! The landing binary embeds `site.toml` at build time. Every field has a
//! default matching the live practice, so a partial or broken file still
//! yields a usable page.

use crate::error::{Result, SiteError};
use serde::Deserialize;
use std::str::FromStr;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand shown in the header and footer
    pub brand_name: String,
    /// Footer tagline after the copyright
    pub footer_tagline: String,
    /// Year printed in the copyright line
    pub copyright_year: u16,
    /// `log` level for the browser console (`error` .. `trace`)
    pub log_level: String,
    /// Doctor profile card
    pub doctor: DoctorConfig,
    /// Office contact details
    pub contact: ContactConfig,
}

/// Doctor profile shown in the about panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Full name with title
    pub display_name: String,
    /// Line under the name
    pub credentials: String,
    /// Quote at the bottom of the card
    pub quote: String,
}

/// Office contact details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Office phone
    pub phone: String,
    /// Office email
    pub email: String,
    /// Street address
    pub address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Dr. Mike".into(),
            footer_tagline: "Providing quality healthcare with compassion.".into(),
            copyright_year: 2024,
            log_level: "info".into(),
            doctor: DoctorConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            display_name: "Dr. Michael Johnson, MD".into(),
            credentials: "Board Certified Family Physician".into(),
            quote: "Committed to providing exceptional healthcare with compassion and expertise"
                .into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "(555) 123-4567".into(),
            email: "info@drmike.com".into(),
            address: "123 Health St, Medical City, MC 12345".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a `site.toml` document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Parse the embedded config, falling back to defaults on error.
    ///
    /// The parse error is handed back rather than logged, since the logger
    /// itself is configured from the result.
    pub fn load_embedded(src: &str) -> (Self, Option<SiteError>) {
        match Self::from_toml_str(src) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Configured console log level.
    pub fn log_level(&self) -> Result<log::Level> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| SiteError::InvalidLogLevel(self.log_level.clone()))
    }
}
