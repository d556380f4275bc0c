//! Car entity model.

use std::str::FromStr;

use carhire_core::car::AvailabilityStatus;
use carhire_core::catalog::is_listable;
use carhire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub passengers: i32,
    pub transmission: String,
    pub fuel: String,
    /// Whole STN units.
    pub price_per_day: i32,
    pub featured: bool,
    pub availability_status: String,
    pub year: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Car {
    /// Shown in the public catalog: active and available.
    pub fn is_listable(&self) -> bool {
        is_listable(self.is_active, &self.availability_status)
    }

    /// Parsed availability, `None` for a label outside the known set.
    pub fn availability(&self) -> Option<AvailabilityStatus> {
        AvailabilityStatus::from_str(&self.availability_status).ok()
    }

    /// `Name (Year)`, as used in contact messages.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.year)
    }
}
