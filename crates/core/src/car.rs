//! Vehicle inventory types and validation rules.
//!
//! Categories, transmissions and fuels are free-form strings so the operator
//! can introduce new labels from the admin UI. Only the availability status
//! is a closed set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Image shown when a car has no photo yet.
pub const DEFAULT_IMAGE_URL: &str = "/placeholder.svg";

/// Oldest model year accepted for a car.
pub const MIN_YEAR: i32 = 1950;
/// Newest model year accepted for a car.
pub const MAX_YEAR: i32 = 2100;

/// Categories the frontend knows icons and copy for.
pub const KNOWN_CATEGORIES: &[&str] = &["SUV", "Sedan", "Esportivo", "Pickup", "Compacto"];
/// Transmission labels offered by the admin form.
pub const KNOWN_TRANSMISSIONS: &[&str] = &["Automático", "Manual"];
/// Fuel labels offered by the admin form.
pub const KNOWN_FUELS: &[&str] = &["Gasolina", "Diesel", "Híbrido", "Elétrico", "Flex"];

// ---------------------------------------------------------------------------
// Availability status
// ---------------------------------------------------------------------------

/// Whether a car can currently be rented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Unavailable,
    Maintenance,
}

impl AvailabilityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Maintenance => "maintenance",
        }
    }

    /// Label shown on the public car card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Disponível",
            Self::Unavailable => "Indisponível",
            Self::Maintenance => "Manutenção",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            "maintenance" => Ok(Self::Maintenance),
            other => Err(CoreError::Validation(format!(
                "Unknown availability status '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Input DTOs
// ---------------------------------------------------------------------------

/// Payload for creating a car. Omitted optional fields take their defaults
/// (placeholder image, not featured, available, active). Numbers and flags
/// may also be sent as strings, the way HTML forms post them.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCar {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(range(min = 1, message = "a car seats at least one passenger"))]
    #[serde(deserialize_with = "crate::coerce::int")]
    pub passengers: i32,
    #[validate(length(min = 1, message = "transmission is required"))]
    pub transmission: String,
    #[validate(length(min = 1, message = "fuel is required"))]
    pub fuel: String,
    #[validate(range(min = 0, message = "price_per_day cannot be negative"))]
    #[serde(deserialize_with = "crate::coerce::int")]
    pub price_per_day: i32,
    #[serde(default, deserialize_with = "crate::coerce::opt_bool")]
    pub featured: Option<bool>,
    pub availability_status: Option<AvailabilityStatus>,
    #[validate(range(min = 1950, max = 2100))]
    #[serde(deserialize_with = "crate::coerce::int")]
    pub year: i32,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "crate::coerce::opt_bool")]
    pub is_active: Option<bool>,
}

impl CreateCar {
    pub fn image_url_or_default(&self) -> &str {
        self.image_url.as_deref().unwrap_or(DEFAULT_IMAGE_URL)
    }
}

/// Partial update for a car. Only provided fields change; `description`
/// may be explicitly cleared with `null`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCar {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "crate::coerce::opt_int")]
    pub passengers: Option<i32>,
    #[validate(length(min = 1))]
    pub transmission: Option<String>,
    #[validate(length(min = 1))]
    pub fuel: Option<String>,
    #[validate(range(min = 0))]
    #[serde(default, deserialize_with = "crate::coerce::opt_int")]
    pub price_per_day: Option<i32>,
    #[serde(default, deserialize_with = "crate::coerce::opt_bool")]
    pub featured: Option<bool>,
    pub availability_status: Option<AvailabilityStatus>,
    #[validate(range(min = 1950, max = 2100))]
    #[serde(default, deserialize_with = "crate::coerce::opt_int")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::coerce::opt_bool")]
    pub is_active: Option<bool>,
}
