//! Health report returned by `GET /api/health`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
    /// Optional component that is not configured.
    Disabled,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: ComponentChecks,
}

#[derive(Debug, Serialize)]
pub struct ComponentChecks {
    pub database: ComponentCheck,
    pub advisor: ComponentCheck,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCheck {
    pub status: ComponentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

impl ComponentCheck {
    pub fn new(status: ComponentStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            latency_ms: None,
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }
}

impl HealthReport {
    /// Only the database decides overall health; a disabled advisor is normal.
    pub fn from_checks(checks: ComponentChecks) -> Self {
        let status = match checks.database.status {
            ComponentStatus::Error => ServiceStatus::Degraded,
            _ => ServiceStatus::Healthy,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_disabled_advisor_keeps_service_healthy() {
        let report = HealthReport::from_checks(ComponentChecks {
            database: ComponentCheck::new(ComponentStatus::Ok, "Connected").with_latency(3),
            advisor: ComponentCheck::new(ComponentStatus::Disabled, "not configured"),
        });

        assert!(report.is_healthy());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "healthy");
        assert_eq!(
            value["checks"]["database"],
            json!({ "status": "ok", "message": "Connected", "latencyMs": 3 })
        );
        assert_eq!(value["checks"]["advisor"]["status"], "disabled");
    }

    #[test]
    fn test_database_error_degrades() {
        let report = HealthReport::from_checks(ComponentChecks {
            database: ComponentCheck::new(ComponentStatus::Error, "down"),
            advisor: ComponentCheck::new(ComponentStatus::Ok, "claude"),
        });

        assert!(!report.is_healthy());
        assert_eq!(serde_json::to_value(&report).unwrap()["status"], "degraded");
    }
}
