use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    MaintenanceEngineer,
    StationController,
    ComplianceOfficer,
    Executive,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::MaintenanceEngineer,
        Role::StationController,
        Role::ComplianceOfficer,
        Role::Executive,
    ];

    /// Parses the wire identifier. Anything outside the four known values is
    /// treated as an unset role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "maintenance_engineer" => Some(Role::MaintenanceEngineer),
            "station_controller" => Some(Role::StationController),
            "compliance_officer" => Some(Role::ComplianceOfficer),
            "executive" => Some(Role::Executive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::MaintenanceEngineer => "maintenance_engineer",
            Role::StationController => "station_controller",
            Role::ComplianceOfficer => "compliance_officer",
            Role::Executive => "executive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::MaintenanceEngineer => "Maintenance Engineer",
            Role::StationController => "Station Controller",
            Role::ComplianceOfficer => "Compliance Officer",
            Role::Executive => "Executive",
        }
    }

    /// Role assigned to a mock login, keyed off the email address.
    pub fn infer_from_email(email: &str) -> Self {
        if email.contains("maintenance") {
            Role::MaintenanceEngineer
        } else if email.contains("station") {
            Role::StationController
        } else if email.contains("compliance") {
            Role::ComplianceOfficer
        } else {
            Role::Executive
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Accepted for form parity; no credential check exists.
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_role() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("driver"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn login_role_follows_email_keywords() {
        assert_eq!(
            Role::infer_from_email("maintenance.lead@metro.example"),
            Role::MaintenanceEngineer
        );
        assert_eq!(
            Role::infer_from_email("station-ops@metro.example"),
            Role::StationController
        );
        assert_eq!(
            Role::infer_from_email("compliance@metro.example"),
            Role::ComplianceOfficer
        );
        assert_eq!(Role::infer_from_email("ceo@metro.example"), Role::Executive);
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let value = serde_json::to_value(Role::ComplianceOfficer).unwrap();
        assert_eq!(value, serde_json::json!("compliance_officer"));
    }
}
