use crate::worldtime::models::ZoneTime;
use crate::worldtime::WorldTimeError;

/// Default base of the public time service.
pub const DEFAULT_BASE_URL: &str = "https://timeapi.io/api";

/// Thin client over the two REST endpoints the widget consumes.
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// `GET /TimeZone/AvailableTimeZones` — every zone identifier the service
    /// knows about, as a flat JSON array of strings.
    pub async fn available_time_zones(&self) -> Result<Vec<String>, WorldTimeError> {
        let url = format!("{}/TimeZone/AvailableTimeZones", self.base_url);
        tracing::debug!("fetching time zone catalog from {url}");

        let zones = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<String>>()
            .await?;

        Ok(zones)
    }

    /// `GET /Time/current/zone?timeZone=<id>` — the current wall-clock time in
    /// one zone. Only the `dateTime` field of the response drives the clock.
    pub async fn current_time(&self, zone: &str) -> Result<ZoneTime, WorldTimeError> {
        let url = format!("{}/Time/current/zone", self.base_url);
        tracing::debug!("fetching current time for {zone}");

        let snapshot = self
            .http
            .get(&url)
            .query(&[("timeZone", zone)])
            .send()
            .await?
            .error_for_status()?
            .json::<ZoneTime>()
            .await?;

        Ok(snapshot)
    }
}
