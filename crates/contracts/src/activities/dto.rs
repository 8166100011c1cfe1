use serde::{Deserialize, Serialize};

/// Distance total for one sport in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// English month name, e.g. "March"
    pub month_name: String,
    /// Strava sport type, e.g. "Ride", "Run"
    pub sport_type: String,
    pub total_km: f64,
}

/// A reporting period for which a commute report can be generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteMonth {
    pub year: i32,
    pub month: u32,
    /// Display label, e.g. "March 2024"
    pub label: String,
}

/// Response of the import trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchTriggerResult {
    /// Number of activities pulled from Strava
    pub fetched: u64,
}
