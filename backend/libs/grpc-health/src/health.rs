//! Health status types and conversions

/// Service health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// All registered dependencies answered
    Serving,
    /// At least one dependency failed its check
    NotServing,
    /// No check has run yet
    Unknown,
}

impl HealthStatus {
    pub fn is_serving(self) -> bool {
        matches!(self, HealthStatus::Serving)
    }
}

impl From<HealthStatus> for tonic_health::ServingStatus {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Serving => tonic_health::ServingStatus::Serving,
            HealthStatus::NotServing => tonic_health::ServingStatus::NotServing,
            HealthStatus::Unknown => tonic_health::ServingStatus::Unknown,
        }
    }
}
