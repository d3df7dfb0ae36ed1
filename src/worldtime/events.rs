use chrono::NaiveDateTime;

use crate::worldtime::models::TimeZoneOption;

/// Everything that can move the widget's state. Each variant is fed through
/// [`crate::worldtime::models::ClockState::apply_event`]; nothing else mutates
/// the state.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockEvent {
    /// One beat of the 1-second ticker, carrying a fresh system-clock sample.
    Tick { now: NaiveDateTime },
    /// The zone catalog arrived from the service.
    CatalogLoaded { zones: Vec<String> },
    CatalogFailed,
    /// The user (or the initial default) picked a catalog entry. `now` is
    /// sampled by the caller at the moment of the event so the reducer stays
    /// clock-free.
    SelectionChanged {
        zone: TimeZoneOption,
        now: NaiveDateTime,
    },
    /// A remote time fetch resolved. `generation` is the token the fetch
    /// captured at dispatch; a mismatch means the result is stale.
    ZoneTimeLoaded {
        generation: u64,
        time: NaiveDateTime,
    },
    ZoneTimeFailed { generation: u64 },
}
