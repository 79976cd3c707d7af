use serde::Deserialize;
use url::Url;
use wokky_geolocation::Coordinates;

use crate::{Conditions, Result, Verdict};

/// The `current` variables requested from the forecast endpoint, in the order
/// Open-Meteo documents them.
const CURRENT: &str = "temperature_2m,relative_humidity_2m,wind_speed_10m,wind_gusts_10m";

#[derive(Deserialize)]
struct ForecastResponse {
    current: Current,
}

#[derive(Deserialize)]
struct Current {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    wind_gusts_10m: f64,
}

impl From<Current> for Conditions {
    fn from(current: Current) -> Self {
        Self {
            temperature: current.temperature_2m,
            relative_humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            wind_gusts: current.wind_gusts_10m,
        }
    }
}

/// Fetches current conditions from an Open-Meteo compatible forecast endpoint.
///
/// Requests are made once each; there is no retry and nothing is cached.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl ForecastClient {
    /// The public Open-Meteo forecast API.
    pub const OPEN_METEO: &'static str = "https://api.open-meteo.com/v1/forecast";

    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn open_meteo() -> Result<Self> {
        Ok(Self::new(Url::parse(Self::OPEN_METEO)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The URL asking for current conditions at `coords`.
    pub fn request_url(&self, coords: Coordinates) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &coords.latitude.to_string())
            .append_pair("longitude", &coords.longitude.to_string())
            .append_pair("current", CURRENT);
        url
    }

    /// Fetch the current conditions at `coords` and judge them.
    pub async fn current(&self, coords: Coordinates) -> Result<Verdict> {
        let url = self.request_url(coords);
        tracing::debug!(%url, "requesting current conditions");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let verdict = Verdict::new(parse_current(&body)?);
        tracing::debug!(is_wokky = verdict.is_wokky, reasons = ?verdict.reasons, "judged conditions");
        Ok(verdict)
    }
}

/// Read the `current` block of a forecast response body.
pub(crate) fn parse_current(body: &str) -> Result<Conditions> {
    let response: ForecastResponse = serde_json::from_str(body)?;
    Ok(response.current.into())
}
