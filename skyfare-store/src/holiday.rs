use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::app_config::HolidayConfig;

/// Holiday calendar keyed by ISO date string, loaded once at startup and
/// immutable for the process lifetime. Only presence matters: the pricing
/// pipeline uses a binary holiday flag, never the holiday's kind.
#[derive(Debug, Clone, Default)]
pub struct HolidayMap {
    entries: HashMap<String, String>,
}

impl HolidayMap {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&iso(date))
    }

    pub fn name_for(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&iso(date)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Debug, Deserialize)]
struct HolidayEntry {
    date: String,
    name: String,
}

/// One best-effort fetch of the holiday feed. Any failure degrades to the
/// empty map: requests then price every date as a non-holiday. No retry, no
/// refresh.
pub async fn fetch_holidays(config: &HolidayConfig) -> HolidayMap {
    let Some(url) = config.feed_url.as_deref() else {
        tracing::info!("no holiday feed configured, holiday pricing disabled");
        return HolidayMap::default();
    };

    match try_fetch(url, Duration::from_secs(config.fetch_timeout_seconds)).await {
        Ok(map) => {
            tracing::info!(holidays = map.len(), "holiday calendar loaded");
            map
        }
        Err(err) => {
            tracing::warn!(%err, "holiday feed fetch failed, continuing with empty calendar");
            HolidayMap::default()
        }
    }
}

async fn try_fetch(url: &str, timeout: Duration) -> Result<HolidayMap, reqwest::Error> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let entries: Vec<HolidayEntry> = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(HolidayMap::from_entries(
        entries.into_iter().map(|e| (e.date, e.name)),
    ))
}
