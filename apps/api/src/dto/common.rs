use serde::Serialize;
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ready: bool,
    pub store: StoreHealth,
}

/// Readiness of the employee store.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct StoreHealth {
    pub backend: &'static str,
    pub status: &'static str,
    pub detail: Option<String>,
}
