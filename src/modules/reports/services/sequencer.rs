use std::sync::atomic::{AtomicU64, Ordering};

/// Last-writer-wins guard for overlapping report requests
///
/// The engine itself is synchronous, but a host may fire a new filter change
/// while an earlier computation is still in flight. Each request takes a
/// token at start; only the holder of the newest token may render its
/// result. Stale results are discarded, never merged.
#[derive(Debug, Default)]
pub struct ReportSequencer {
    latest: AtomicU64,
}

impl ReportSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request and get its token
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still identifies the most recent request
    pub fn is_current(&self, token: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == token
    }
}
