//! # ETA cache: local countdown between server syncs
//!
//! The ETA service is asked for a ticket's wait time once, right after the ticket
//! is created. From then on the dashboard shows a countdown computed locally from
//! the last known value and the time it was captured, so the backend is not polled.
//!
//! ## Storage
//!
//! One entry per ticket under the key `eta_<ticketId>`, JSON-encoded:
//!
//! ```json
//! {"estimatedWaitMinutes":12,"remainingMinutes":9,"updatedAt":"2024-05-01T10:00:00Z","savedAt":1714557600000}
//! ```
//!
//! `savedAt` is epoch milliseconds. An entry without a numeric `savedAt` is
//! backfilled with the current time when read. An entry that does not parse, or
//! whose `savedAt` is not a plausible timestamp, is treated as absent. Minutes
//! written as fractions or negatives are read as whole, non-negative minutes. Entries are never deleted, only overwritten.
//!
//! ## Decay
//!
//! ```text
//! base      = remaining ?? estimated ?? 0
//! elapsed   = max(0, floor((now - savedAt) / 60s))
//! remaining = max(0, base - elapsed)
//! ```
//!
//! [`EtaCache::read_cached`] persists the decayed value with `savedAt = now`, so
//! the next read counts down from there. [`EtaCache::peek`] computes the same
//! value without writing.

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, MILLIS_PER_MINUTE};
use crate::kv::KeyValueStore;

/// Prefix of every ETA cache key.
pub const ETA_KEY_PREFIX: &str = "eta_";

/// Largest `savedAt` magnitude accepted from storage, about 285,000 years.
const MAX_SAVED_AT_MILLIS: f64 = 9.0e15;

/// Timestamp as reported by the ETA service: an ISO-8601 string or an epoch number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerTimestamp {
    Epoch(f64),
    Text(String),
}

/// A cached wait-time estimate for one ticket.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedEta {
    pub estimated_wait_minutes: Option<u32>,
    pub remaining_minutes: Option<u32>,
    pub updated_at: Option<ServerTimestamp>,
    /// Epoch milliseconds at which this value was captured.
    pub saved_at: i64,
}

/// On-disk shape; tolerates a missing or non-numeric `savedAt` and
/// fractional minutes.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEta {
    #[serde(default)]
    estimated_wait_minutes: Option<f64>,
    #[serde(default)]
    remaining_minutes: Option<f64>,
    #[serde(default)]
    updated_at: Option<ServerTimestamp>,
    #[serde(default)]
    saved_at: Option<serde_json::Value>,
}

impl CachedEta {
    /// The value to show: remaining minutes, else the original estimate.
    pub fn display_minutes(&self) -> Option<u32> {
        self.remaining_minutes.or(self.estimated_wait_minutes)
    }

    /// Count this entry down to `now_millis`.
    pub fn decayed(&self, now_millis: i64) -> CachedEta {
        let base = self.display_minutes().unwrap_or(0);
        let elapsed = now_millis.saturating_sub(self.saved_at).max(0) / MILLIS_PER_MINUTE;
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        CachedEta {
            estimated_wait_minutes: self.estimated_wait_minutes,
            remaining_minutes: Some(base.saturating_sub(elapsed)),
            updated_at: self.updated_at.clone(),
            saved_at: now_millis,
        }
    }
}

/// Convert a minutes value from the wire to whole, non-negative minutes.
///
/// Fractions round up; negative and non-finite values become 0.
pub fn whole_minutes(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let ceiled = value.ceil();
    if ceiled >= u32::MAX as f64 {
        u32::MAX
    } else {
        ceiled as u32
    }
}

/// Per-ticket ETA cache over a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct EtaCache<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> EtaCache<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn key_for(ticket_id: &str) -> String {
        format!("{ETA_KEY_PREFIX}{ticket_id}")
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Read the raw entry for a ticket. Corrupt entries read as `None`.
    pub fn load(&self, ticket_id: &str) -> Option<CachedEta> {
        let raw = self.store.get(&Self::key_for(ticket_id))?;
        let stored: StoredEta = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Ignoring corrupt ETA cache entry for {}: {}", ticket_id, e);
                return None;
            }
        };
        let saved_at = match stored.saved_at.and_then(|v| v.as_f64()) {
            None => self.clock.now_millis(),
            Some(ms) if ms.is_finite() && ms.abs() <= MAX_SAVED_AT_MILLIS => ms as i64,
            Some(ms) => {
                tracing::warn!("Ignoring ETA cache entry for {} with savedAt {}", ticket_id, ms);
                return None;
            }
        };
        Some(CachedEta {
            estimated_wait_minutes: stored.estimated_wait_minutes.map(whole_minutes),
            remaining_minutes: stored.remaining_minutes.map(whole_minutes),
            updated_at: stored.updated_at,
            saved_at,
        })
    }

    pub fn save(&self, ticket_id: &str, eta: &CachedEta) {
        match serde_json::to_string(eta) {
            Ok(json) => self.store.set(&Self::key_for(ticket_id), &json),
            Err(e) => tracing::warn!("Failed to encode ETA for {}: {}", ticket_id, e),
        }
    }

    /// Store a value fresh from the server, stamped with the current time.
    pub fn record(
        &self,
        ticket_id: &str,
        estimated_wait_minutes: Option<u32>,
        remaining_minutes: Option<u32>,
        updated_at: Option<ServerTimestamp>,
    ) -> CachedEta {
        let eta = CachedEta {
            estimated_wait_minutes,
            remaining_minutes,
            updated_at,
            saved_at: self.clock.now_millis(),
        };
        self.save(ticket_id, &eta);
        eta
    }

    /// The decayed estimate for a ticket, persisted back with `savedAt = now`.
    pub fn read_cached(&self, ticket_id: &str) -> Option<CachedEta> {
        let cached = self.load(ticket_id)?;
        let decayed = cached.decayed(self.clock.now_millis());
        tracing::debug!(
            "ETA cache hit for {}: {:?} -> {:?}",
            ticket_id,
            cached.remaining_minutes,
            decayed.remaining_minutes
        );
        self.save(ticket_id, &decayed);
        Some(decayed)
    }

    /// The decayed estimate for a ticket, leaving the stored entry untouched.
    pub fn peek(&self, ticket_id: &str) -> Option<CachedEta> {
        let cached = self.load(ticket_id)?;
        Some(cached.decayed(self.clock.now_millis()))
    }
}
