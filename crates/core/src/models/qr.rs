use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::attendance::timestamp_format;

/// The QR payload currently on display and the window it is valid for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrTicket {
    pub key: String,
    pub url: String,
    #[serde(with = "timestamp_format")]
    pub valid_from: NaiveDateTime,
    /// First instant of the next slot; the key stops working here
    #[serde(with = "timestamp_format")]
    pub valid_until: NaiveDateTime,
}

/// Builds the URL encoded into the QR image: `base_url?key=<key>`
pub fn ticket_url(base_url: &str, key: &str) -> String {
    format!("{}?key={}", base_url.trim_end_matches('/'), key)
}
