use std::sync::Arc;

use crate::{
    clock::Clock,
    errors::AttendResult,
    models::qr::{QrTicket, ticket_url},
    slot::{SlotInterval, SlotKey, slot_end, slot_start, validate_key},
};

/// Hands out the ticket for the current slot and checks keys against it
#[derive(Clone)]
pub struct KeyIssuer {
    base_url: String,
    interval: SlotInterval,
    clock: Arc<dyn Clock>,
}

impl KeyIssuer {
    pub fn new(base_url: impl Into<String>, interval: SlotInterval, clock: Arc<dyn Clock>) -> Self {
        Self {
            base_url: base_url.into(),
            interval,
            clock,
        }
    }

    pub fn current_ticket(&self) -> QrTicket {
        let now = self.clock.now();
        let key = SlotKey::for_time(now, self.interval);
        QrTicket {
            url: ticket_url(&self.base_url, key.as_str()),
            key: key.to_string(),
            valid_from: slot_start(now, self.interval),
            valid_until: slot_end(now, self.interval),
        }
    }

    pub fn authorize(&self, supplied: Option<&str>) -> AttendResult<SlotKey> {
        validate_key(supplied, self.clock.now(), self.interval)
    }
}
