use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;
use parking_lot::Mutex;

pub const WINDOW: Duration = Duration::from_secs(15 * 60);
pub const MAX_REQUESTS: u32 = 3;

/// One fixed rate-limit window for a single client IP.
#[derive(Debug)]
struct WindowRecord {
    count: u32,
    window_start: Instant,
}

/// Process-wide fixed-window request counter keyed by client IP.
///
/// This is deliberately a fixed window, not a sliding one: a burst at the end
/// of one window plus a burst at the start of the next can admit up to twice
/// the limit inside a single window length. State lives in this process only
/// and resets on restart; multiple instances each count their own share of
/// traffic. Each record's read-modify-write happens under its own mutex.
#[derive(Clone)]
pub struct RateLimiterStore {
    map: Arc<DashMap<String, Mutex<WindowRecord>>>,
    window: Duration,
    limit: u32,
}

impl RateLimiterStore {
    pub fn new() -> Self {
        Self::with_policy(WINDOW, MAX_REQUESTS)
    }

    pub fn with_policy(window: Duration, limit: u32) -> Self {
        RateLimiterStore {
            map: Arc::new(DashMap::new()),
            window,
            limit,
        }
    }

    /// Admit or reject one request from `key`, counting it if admitted.
    pub fn admit(&self, key: &str) -> bool {
        self.admit_at(key, Instant::now())
    }

    fn admit_at(&self, key: &str, now: Instant) -> bool {
        let entry = self.map.entry(key.to_string()).or_insert_with(|| {
            Mutex::new(WindowRecord {
                count: 0,
                window_start: now,
            })
        });
        let mut record = entry.lock();

        if now.duration_since(record.window_start) > self.window {
            record.count = 1;
            record.window_start = now;
            return true;
        }

        if record.count >= self.limit {
            return false;
        }

        record.count += 1;
        true
    }

    /// Requests left in the current window for `key`. Applies the same expiry
    /// check as [`admit`](Self::admit) but never mutates the record.
    pub fn remaining(&self, key: &str) -> u32 {
        self.remaining_at(key, Instant::now())
    }

    fn remaining_at(&self, key: &str, now: Instant) -> u32 {
        match self.map.get(key) {
            Some(entry) => {
                let record = entry.lock();
                if now.duration_since(record.window_start) > self.window {
                    self.limit
                } else {
                    self.limit.saturating_sub(record.count)
                }
            }
            None => self.limit,
        }
    }

    /// Drops records whose window has expired. Bounds the table's memory;
    /// expiry itself is already handled inline by `admit` and `remaining`.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    fn sweep_at(&self, now: Instant) -> usize {
        let before = self.map.len();
        self.map
            .retain(|_, record| now.duration_since(record.get_mut().window_start) <= self.window);
        before - self.map.len()
    }
}

impl Default for RateLimiterStore {
    fn default() -> Self {
        Self::new()
    }
}
