use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    foot_router::{ExternalRoute, FootRouter},
    response::parse_route_response,
};

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("No route found: {0}")]
    NoRoute(String),

    #[error("Expected 2 or 3 waypoints, got {0}")]
    InvalidWaypoints(usize),
}

impl OsrmError {
    /// Failures worth retrying: transport problems, rate limiting and
    /// server-side errors.
    pub fn is_transient(&self) -> bool {
        match self {
            OsrmError::Request(error) => {
                error.is_timeout() || error.is_connect() || error.is_request()
            }
            OsrmError::Api { status, .. } => *status == 429 || *status >= 500,
            OsrmError::Deserialize(_) | OsrmError::NoRoute(_) | OsrmError::InvalidWaypoints(_) => {
                false
            }
        }
    }
}

pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";
pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_OSRM_PROFILE: &str = "foot";

const OSRM_URL_ENV_VAR: &str = "UNIWAY_OSRM_URL";
const OSRM_PROFILE_ENV_VAR: &str = "UNIWAY_OSRM_PROFILE";
const OSRM_TIMEOUT_ENV_VAR: &str = "UNIWAY_OSRM_TIMEOUT_SECS";
const OSRM_MAX_RETRIES_ENV_VAR: &str = "UNIWAY_OSRM_MAX_RETRIES";
const OSRM_BACKOFF_ENV_VAR: &str = "UNIWAY_OSRM_RETRY_BACKOFF_MS";

#[derive(Debug, Clone, PartialEq)]
pub struct OsrmClientParams {
    pub osrm_url: String,
    pub profile: String,
    pub timeout: Duration,
    pub max_retries: u32,
    /// Delay before the first retry, doubled on every following attempt.
    pub retry_backoff: Duration,
}

impl Default for OsrmClientParams {
    fn default() -> Self {
        OsrmClientParams {
            osrm_url: DEFAULT_OSRM_URL.to_string(),
            profile: DEFAULT_OSRM_PROFILE.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_backoff: Duration::from_millis(250),
        }
    }
}

impl OsrmClientParams {
    pub fn from_env() -> Self {
        OsrmClientParams::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or unparsable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = OsrmClientParams::default();
        let parse_u64 = |key: &str| lookup(key).and_then(|value| value.trim().parse::<u64>().ok());

        OsrmClientParams {
            osrm_url: lookup(OSRM_URL_ENV_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.osrm_url),
            profile: lookup(OSRM_PROFILE_ENV_VAR).unwrap_or(defaults.profile),
            timeout: parse_u64(OSRM_TIMEOUT_ENV_VAR)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: parse_u64(OSRM_MAX_RETRIES_ENV_VAR)
                .and_then(|retries| u32::try_from(retries).ok())
                .unwrap_or(defaults.max_retries),
            retry_backoff: parse_u64(OSRM_BACKOFF_ENV_VAR)
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_backoff),
        }
    }
}

pub struct OsrmRouteClient {
    params: OsrmClientParams,
    client: reqwest::Client,
}

impl OsrmRouteClient {
    pub fn new(params: OsrmClientParams) -> Result<Self, OsrmError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;
        Ok(Self { params, client })
    }

    pub fn params(&self) -> &OsrmClientParams {
        &self.params
    }

    pub fn route_url(&self, points: &[geo_types::Point]) -> String {
        let mut url = self.params.osrm_url.clone();
        url.push_str(OSRM_ROUTE_API_PATH);
        url.push_str(&self.params.profile);
        url.push('/');

        for (i, point) in points.iter().enumerate() {
            url.push_str(&format!("{},{}", point.x(), point.y()));

            if i < points.len() - 1 {
                url.push(';');
            }
        }

        url
    }

    pub async fn fetch_route(
        &self,
        points: &[geo_types::Point],
    ) -> Result<ExternalRoute, OsrmError> {
        if !(2..=3).contains(&points.len()) {
            return Err(OsrmError::InvalidWaypoints(points.len()));
        }

        let url = self.route_url(points);
        let mut backoff = self.params.retry_backoff;
        let mut attempt = 0;

        loop {
            debug!("OSRM: requesting route {} (attempt {})", url, attempt + 1);

            match self.request_route(&url).await {
                Ok(route) => return Ok(route),
                Err(error) if error.is_transient() && attempt < self.params.max_retries => {
                    warn!(
                        "OSRM: transient failure, retrying in {:?}: {}",
                        backoff, error
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }

    async fn request_route(&self, url: &str) -> Result<ExternalRoute, OsrmError> {
        let response = self
            .client
            .get(url)
            .query(&[
                ("alternatives", "true"),
                ("steps", "true"),
                ("overview", "full"),
                ("geometries", "geojson"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // OSRM answers NoRoute and similar codes with a 400 and a JSON body
            if status.as_u16() == 400 {
                if let Err(error @ OsrmError::NoRoute(_)) = parse_route_response(&body) {
                    return Err(error);
                }
            }

            return Err(OsrmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_route_response(&body)
    }
}

impl FootRouter for OsrmRouteClient {
    async fn route(&self, waypoints: &[geo_types::Point]) -> Option<ExternalRoute> {
        match self.fetch_route(waypoints).await {
            Ok(route) => Some(route),
            Err(error) => {
                warn!("OSRM: route request failed: {}", error);
                None
            }
        }
    }
}
