//! Shared HTTP server state

use chrono::{DateTime, Local};
use statefacts_core::api::{FactStore, Services};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Application state (shared across all handlers)
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    pub stats: Arc<RwLock<ServerStats>>,
}

impl AppState {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            stats: Arc::new(RwLock::new(ServerStats::new())),
        }
    }

    pub fn facts(&self) -> &dyn FactStore {
        self.services.facts.as_ref()
    }

    pub fn record_request(&self, endpoint: &str) {
        if let Ok(mut stats) = self.stats.write() {
            stats.increment_request(endpoint);
        }
    }

    pub fn record_error(&self) {
        if let Ok(mut stats) = self.stats.write() {
            stats.increment_error();
        }
    }
}

/// Server statistics, reported by `/health`
pub struct ServerStats {
    pub requests_total: u64,
    pub requests_by_endpoint: BTreeMap<String, u64>,
    pub errors_total: u64,
    pub start_time: DateTime<Local>,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            requests_total: 0,
            requests_by_endpoint: BTreeMap::new(),
            errors_total: 0,
            start_time: Local::now(),
        }
    }

    pub fn increment_request(&mut self, endpoint: &str) {
        self.requests_total += 1;
        *self
            .requests_by_endpoint
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    pub fn increment_error(&mut self) {
        self.errors_total += 1;
    }

    pub fn uptime_seconds(&self) -> f64 {
        let now = Local::now();
        (now - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}
