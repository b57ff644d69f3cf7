//! Complaint classification - category and responsible agency
//!
//! Each category has a default handling agency, matching the routing table
//! the intake form applies when the citizen does not pick an agency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complaint category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Roads,
    WaterSupply,
    Electricity,
    WasteManagement,
    PublicTransport,
    Healthcare,
    Education,
    PublicSafety,
    Environment,
    Other,
}

impl Category {
    /// All categories, in intake-form order
    pub const ALL: [Category; 10] = [
        Self::Roads,
        Self::WaterSupply,
        Self::Electricity,
        Self::WasteManagement,
        Self::PublicTransport,
        Self::Healthcare,
        Self::Education,
        Self::PublicSafety,
        Self::Environment,
        Self::Other,
    ];

    /// Wire representation (stored in the database as-is)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Roads => "ROADS",
            Self::WaterSupply => "WATER_SUPPLY",
            Self::Electricity => "ELECTRICITY",
            Self::WasteManagement => "WASTE_MANAGEMENT",
            Self::PublicTransport => "PUBLIC_TRANSPORT",
            Self::Healthcare => "HEALTHCARE",
            Self::Education => "EDUCATION",
            Self::PublicSafety => "PUBLIC_SAFETY",
            Self::Environment => "ENVIRONMENT",
            Self::Other => "OTHER",
        }
    }

    /// Human-readable label for display surfaces
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Roads => "Roads and Infrastructure",
            Self::WaterSupply => "Water Supply",
            Self::Electricity => "Electricity",
            Self::WasteManagement => "Waste Management",
            Self::PublicTransport => "Public Transport",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::PublicSafety => "Public Safety",
            Self::Environment => "Environment",
            Self::Other => "Other",
        }
    }

    /// The agency that handles this category by default
    #[must_use]
    pub const fn default_agency(&self) -> Agency {
        match self {
            Self::Roads => Agency::PublicWorks,
            Self::WaterSupply => Agency::WaterAuthority,
            Self::Electricity => Agency::ElectricityBoard,
            Self::WasteManagement => Agency::WasteManagement,
            Self::PublicTransport => Agency::TransportAuthority,
            Self::Healthcare => Agency::HealthDepartment,
            Self::Education => Agency::EducationDepartment,
            Self::PublicSafety => Agency::PoliceDepartment,
            Self::Environment => Agency::EnvironmentalProtection,
            Self::Other => Agency::GeneralAdministration,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

/// Government department responsible for handling a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Agency {
    PublicWorks,
    WaterAuthority,
    ElectricityBoard,
    WasteManagement,
    TransportAuthority,
    HealthDepartment,
    EducationDepartment,
    PoliceDepartment,
    EnvironmentalProtection,
    GeneralAdministration,
}

impl Agency {
    /// All agencies, in intake-form order
    pub const ALL: [Agency; 10] = [
        Self::PublicWorks,
        Self::WaterAuthority,
        Self::ElectricityBoard,
        Self::WasteManagement,
        Self::TransportAuthority,
        Self::HealthDepartment,
        Self::EducationDepartment,
        Self::PoliceDepartment,
        Self::EnvironmentalProtection,
        Self::GeneralAdministration,
    ];

    /// Wire representation (stored in the database as-is)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PublicWorks => "PUBLIC_WORKS",
            Self::WaterAuthority => "WATER_AUTHORITY",
            Self::ElectricityBoard => "ELECTRICITY_BOARD",
            Self::WasteManagement => "WASTE_MANAGEMENT",
            Self::TransportAuthority => "TRANSPORT_AUTHORITY",
            Self::HealthDepartment => "HEALTH_DEPARTMENT",
            Self::EducationDepartment => "EDUCATION_DEPARTMENT",
            Self::PoliceDepartment => "POLICE_DEPARTMENT",
            Self::EnvironmentalProtection => "ENVIRONMENTAL_PROTECTION",
            Self::GeneralAdministration => "GENERAL_ADMINISTRATION",
        }
    }

    /// Human-readable label for display surfaces
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PublicWorks => "Department of Public Works",
            Self::WaterAuthority => "Water Authority",
            Self::ElectricityBoard => "Electricity Board",
            Self::WasteManagement => "Waste Management Department",
            Self::TransportAuthority => "Transport Authority",
            Self::HealthDepartment => "Health Department",
            Self::EducationDepartment => "Education Department",
            Self::PoliceDepartment => "Police Department",
            Self::EnvironmentalProtection => "Environmental Protection Agency",
            Self::GeneralAdministration => "General Administration",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Agency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|a| a.as_str() == s)
            .copied()
            .ok_or_else(|| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_agency_roundtrip() {
        for agency in Agency::ALL {
            let parsed: Agency = agency.as_str().parse().unwrap();
            assert_eq!(parsed, agency);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("POTHOLES".parse::<Category>().is_err());
    }

    #[test]
    fn test_default_agency_routing() {
        assert_eq!(Category::Roads.default_agency(), Agency::PublicWorks);
        assert_eq!(Category::Other.default_agency(), Agency::GeneralAdministration);
        assert_eq!(
            Category::PublicSafety.default_agency(),
            Agency::PoliceDepartment
        );
    }

    #[test]
    fn test_serde_wire_form() {
        let json = serde_json::to_string(&Category::Roads).unwrap();
        assert_eq!(json, "\"ROADS\"");
        let agency: Agency = serde_json::from_str("\"PUBLIC_WORKS\"").unwrap();
        assert_eq!(agency, Agency::PublicWorks);
    }
}
