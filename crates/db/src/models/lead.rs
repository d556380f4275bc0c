//! Lead entity model and the enriched API representation.

use std::str::FromStr;

use carhire_core::dashboard::LeadFigures;
use carhire_core::lead::{lead_code, LeadStatus};
use carhire_core::pricing::{estimate_for, rental_days};
use carhire_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `leads` table joined with a summary of its car.
///
/// The `car_*` columns are `NULL` when the lead has no car or the car was
/// deleted.
#[derive(Debug, Clone, FromRow)]
pub struct Lead {
    pub id: DbId,
    pub status: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub contact_channel: String,
    pub pickup_date: Option<Timestamp>,
    pub return_date: Option<Timestamp>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub message: Option<String>,
    pub notes: Option<String>,
    pub car_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub car_name: Option<String>,
    pub car_image_url: Option<String>,
    pub car_price_per_day: Option<i32>,
}

/// The car fields embedded in a lead response.
#[derive(Debug, Clone, Serialize)]
pub struct LeadCar {
    pub id: DbId,
    pub name: String,
    pub image_url: String,
    pub price_per_day: i32,
}

/// Lead as returned by the admin API, with derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct LeadResponse {
    pub id: DbId,
    /// Short display code, e.g. `res-042`.
    pub code: String,
    pub status: String,
    /// Display label for `status`; `None` for labels outside the known set.
    pub status_label: Option<&'static str>,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub contact_channel: String,
    pub pickup_date: Option<Timestamp>,
    pub return_date: Option<Timestamp>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub message: Option<String>,
    pub notes: Option<String>,
    pub car_id: Option<DbId>,
    pub car: Option<LeadCar>,
    pub rental_days: Option<i64>,
    pub estimated_total: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Lead {
    pub fn car(&self) -> Option<LeadCar> {
        Some(LeadCar {
            id: self.car_id?,
            name: self.car_name.clone()?,
            image_url: self.car_image_url.clone()?,
            price_per_day: self.car_price_per_day?,
        })
    }

    /// Inputs for the dashboard aggregation.
    pub fn figures(&self) -> LeadFigures {
        LeadFigures {
            status: LeadStatus::from_str(&self.status).ok(),
            pickup_date: self.pickup_date,
            return_date: self.return_date,
            price_per_day: self.car_price_per_day,
        }
    }
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        let car = lead.car();
        let rental_days = rental_days(lead.pickup_date, lead.return_date);
        let estimated_total = estimate_for(
            lead.pickup_date,
            lead.return_date,
            car.as_ref().map(|c| c.price_per_day),
        );

        Self {
            id: lead.id,
            code: lead_code(lead.id),
            status_label: LeadStatus::from_str(&lead.status).ok().map(LeadStatus::label),
            status: lead.status,
            customer_name: lead.customer_name,
            customer_email: lead.customer_email,
            customer_phone: lead.customer_phone,
            contact_channel: lead.contact_channel,
            pickup_date: lead.pickup_date,
            return_date: lead.return_date,
            pickup_location: lead.pickup_location,
            dropoff_location: lead.dropoff_location,
            message: lead.message,
            notes: lead.notes,
            car_id: lead.car_id,
            car,
            rental_days,
            estimated_total,
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}
