use serde::{Deserialize, Deserializer, Serialize};

/// One row of the historical fare table. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightRecord {
    pub airline: String,
    pub source_city: String,
    pub destination_city: String,
    /// "HH:MM", 24-hour.
    pub departure_time: String,
    pub arrival_time: String,
    pub stops: u32,
    /// "Economy" or "Business", capitalized at load time.
    pub class: String,
    /// Days between booking and travel when the fare was recorded.
    #[serde(deserialize_with = "int_like")]
    pub days_left: u32,
    /// Historical observed fare; lookup recomputes a predicted price instead.
    pub price: f64,
}

impl FlightRecord {
    /// Load-time normalization so matching is exact after lowercasing:
    /// "economy" and "ECONOMY" both become "Economy".
    pub fn normalize(&mut self) {
        self.class = capitalize(&self.class);
    }
}

/// Capitalized form of a cabin-class string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// Some exports of the dataset carry days_left as "3.0"; coerce to integer.
fn int_like<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw < 0.0 {
        return Err(serde::de::Error::custom("days_left must be non-negative"));
    }
    Ok(raw as u32)
}
