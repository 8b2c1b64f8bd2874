use super::metrics::days_since;
use crate::types::profile::PublicEvent;
use chrono::{DateTime, Utc};

pub const ACTIVITY_WINDOW_DAYS: usize = 14;

/// Daily push-event counts over the window, oldest day first and today last.
pub fn push_activity(events: &[PublicEvent], now: DateTime<Utc>) -> Vec<u32> {
    let mut buckets = vec![0; ACTIVITY_WINDOW_DAYS];
    for event in events.iter().filter(|event| event.is_push()) {
        let age = days_since(event.created_at, now).floor();
        if (0.0..ACTIVITY_WINDOW_DAYS as f64).contains(&age) {
            buckets[ACTIVITY_WINDOW_DAYS - 1 - age as usize] += 1;
        }
    }
    buckets
}
