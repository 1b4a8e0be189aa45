//! API client for the argentinadatos.com holiday endpoint.
//!
//! Fetches the raw holiday list for a year and normalizes it into the
//! domain `Holiday` model: missing `tipo` defaults to "inamovible" and
//! the result is sorted ascending by calendar date.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::models::{Holiday, HolidayKind};

use super::ApiError;

/// Base URL for the holiday endpoint; the year is appended as a path
/// segment: `{base}/{year}`.
const API_BASE_URL: &str = "https://api.argentinadatos.com/v1/feriados";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Raw wire record as returned by the API. `tipo` and `info` are
/// optional; some years omit them.
#[derive(Debug, Deserialize)]
struct HolidayRecord {
    fecha: NaiveDate,
    nombre: String,
    #[serde(default)]
    tipo: Option<String>,
    #[serde(default)]
    info: Option<String>,
}

/// API client for the holiday service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the production endpoint.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against an alternate base URL (config override).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the holidays of a year, normalized and date-sorted.
    pub async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        let url = format!("{}/{}", self.base_url, year);
        debug!(url = %url, "Fetching holidays");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_response(response).await?;

        let records: Vec<HolidayRecord> = response.json().await?;
        debug!(year, count = records.len(), "Holidays response received");

        Ok(normalize(records))
    }

    /// Check if response is successful, returning a classified error with
    /// the body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

/// Convert wire records to domain holidays: default the kind, then sort
/// ascending by date so consumers can rely on chronological order.
fn normalize(records: Vec<HolidayRecord>) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = records
        .into_iter()
        .map(|r| Holiday {
            date: r.fecha,
            name: r.nombre,
            kind: HolidayKind::from_wire(r.tipo.as_deref()),
            note: r.info,
        })
        .collect();
    holidays.sort_by_key(|h| h.date);
    holidays
}
