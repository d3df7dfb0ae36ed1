use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::worldtime::events::ClockEvent;
use crate::worldtime::WorldTimeError;

/// Catalog value of the synthetic "use the system clock" entry.
pub const LOCAL_ZONE_ID: &str = "local";

pub const CATALOG_ERROR: &str = "Failed to fetch time zones";
pub const ZONE_TIME_ERROR: &str = "Failed to fetch world time";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZoneOption {
    pub value: String,
    pub label: String,
}

impl TimeZoneOption {
    /// The sentinel entry, always first in the catalog.
    pub fn local() -> Self {
        Self {
            value: LOCAL_ZONE_ID.to_string(),
            label: "Local Time".to_string(),
        }
    }

    /// A selectable entry for a service identifier. Labels swap underscores
    /// for spaces and change nothing else.
    pub fn from_identifier(id: String) -> Self {
        Self {
            label: id.replace('_', " "),
            value: id,
        }
    }

    pub fn is_local(&self) -> bool {
        self.value == LOCAL_ZONE_ID
    }
}

/// Builds the selectable catalog from a fetched identifier list, prepending
/// the sentinel entry.
pub fn build_catalog(zone_ids: Vec<String>) -> Vec<TimeZoneOption> {
    let mut catalog = Vec::with_capacity(zone_ids.len() + 1);
    catalog.push(TimeZoneOption::local());
    catalog.extend(zone_ids.into_iter().map(TimeZoneOption::from_identifier));
    catalog
}

/// Response body of `GET /Time/current/zone`. Fields beyond `dateTime` are
/// service metadata the widget tolerates but does not use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTime {
    pub date_time: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub current_local_time: Option<String>,
}

impl ZoneTime {
    pub fn parsed_date_time(&self) -> Result<NaiveDateTime, WorldTimeError> {
        parse_timestamp(&self.date_time)
    }
}

/// Parses the service's `dateTime` into the zone's wall-clock time. The
/// service reports zone-local time, sometimes with a UTC offset or `Z` and
/// sub-second digits attached.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, WorldTimeError> {
    if let Ok(fixed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(fixed.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| WorldTimeError::InvalidTimestamp(raw.to_string()))
}

/// Zero-pads a clock unit to two digits, `5` → `"05"`.
pub fn format_time_unit(unit: u32) -> String {
    format!("{unit:02}")
}

/// Which source is allowed to write the displayed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The 1-second ticker follows the system clock.
    Local,
    /// The display is frozen at the instant last reported by the service.
    Remote,
}

/// The widget's entire mutable state. Owned by one signal and mutated only
/// through [`ClockState::apply_event`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClockState {
    pub displayed: NaiveDateTime,
    pub mode: Mode,
    pub zones: Vec<TimeZoneOption>,
    pub selected: Option<TimeZoneOption>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every selection change. In-flight fetches carry the value
    /// they saw at dispatch; completion events with an older value are
    /// discarded.
    pub generation: u64,
}

impl ClockState {
    /// State at mount: local mode, catalog loading, clock at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            displayed: now,
            mode: Mode::Local,
            zones: Vec::new(),
            selected: None,
            loading: true,
            error: None,
            generation: 0,
        }
    }

    pub fn apply_event(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::Tick { now } => {
                if self.mode == Mode::Local {
                    self.displayed = now;
                }
            }
            ClockEvent::CatalogLoaded { zones } => {
                self.zones = build_catalog(zones);
                self.loading = false;
            }
            ClockEvent::CatalogFailed => {
                self.error = Some(CATALOG_ERROR.to_string());
                self.loading = false;
            }
            ClockEvent::SelectionChanged { zone, now } => {
                self.generation += 1;
                if zone.is_local() {
                    self.mode = Mode::Local;
                    self.displayed = now;
                    self.loading = false;
                    self.error = None;
                } else {
                    self.mode = Mode::Remote;
                    self.loading = true;
                }
                self.selected = Some(zone);
            }
            ClockEvent::ZoneTimeLoaded { generation, time } => {
                if generation != self.generation {
                    return;
                }
                self.displayed = time;
                self.loading = false;
                self.error = None;
            }
            ClockEvent::ZoneTimeFailed { generation } => {
                if generation != self.generation {
                    return;
                }
                self.error = Some(ZONE_TIME_ERROR.to_string());
                self.loading = false;
            }
        }
    }
}
