//! Rendering one instant in several time zones.

use chrono::{DateTime, Local, SubsecRound, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::ShowcaseError;

/// Zones shown when none are configured.
pub const DEFAULT_ZONES: [&str; 3] = ["Europe/Berlin", "America/New_York", "Asia/Tokyo"];

const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// One rendered line: which clock, and what it reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZonedTime {
    pub label: String,
    pub rendered: String,
}

/// Resolve an IANA zone name.
pub fn parse_zone(name: &str) -> Result<Tz, ShowcaseError> {
    name.parse::<Tz>()
        .map_err(|_| ShowcaseError::UnknownTimeZone { name: name.into() })
}

/// A single instant, truncated to milliseconds, plus the zones to show it in.
#[derive(Debug, Clone)]
pub struct ZonedClock {
    instant: DateTime<Utc>,
    zones: Vec<(String, Tz)>,
}

impl ZonedClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant: instant.trunc_subsecs(3),
            zones: Vec::new(),
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Add zones by IANA name, failing on the first unknown one.
    pub fn with_zones<I, S>(mut self, names: I) -> Result<Self, ShowcaseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            self.zones.push((name.to_owned(), parse_zone(name)?));
        }
        Ok(self)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// UTC first, then the local zone, then each configured zone in order.
    pub fn render(&self) -> Vec<ZonedTime> {
        let mut lines = Vec::with_capacity(self.zones.len() + 2);
        lines.push(ZonedTime {
            label: "UTC".into(),
            rendered: self.instant.format(FORMAT).to_string(),
        });
        lines.push(ZonedTime {
            label: "local".into(),
            rendered: self
                .instant
                .with_timezone(&Local)
                .format(FORMAT)
                .to_string(),
        });
        for (label, tz) in &self.zones {
            lines.push(ZonedTime {
                label: label.clone(),
                rendered: self.instant.with_timezone(tz).format(FORMAT).to_string(),
            });
        }
        lines
    }
}
