//! Lead (reservation inquiry) types, validation, and date parsing.
//!
//! New leads take one of the five known statuses. Admin edits may set any
//! short label, and there are no transition rules: a lead may move from any
//! status to any other. Labels outside the known set are stored as-is and
//! count as neither open nor revenue.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Pendente,
    Confirmada,
    EmAndamento,
    Concluida,
    Cancelada,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        Self::Pendente,
        Self::Confirmada,
        Self::EmAndamento,
        Self::Concluida,
        Self::Cancelada,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Confirmada => "confirmada",
            Self::EmAndamento => "em_andamento",
            Self::Concluida => "concluida",
            Self::Cancelada => "cancelada",
        }
    }

    /// Human-readable label for the admin UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Confirmada => "Confirmada",
            Self::EmAndamento => "Em Andamento",
            Self::Concluida => "Concluída",
            Self::Cancelada => "Cancelada",
        }
    }

    /// Leads still being worked on: pending, confirmed, or in progress.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Pendente | Self::Confirmada | Self::EmAndamento)
    }

    /// Finished and cancelled leads no longer contribute to the revenue
    /// estimate.
    pub fn counts_toward_revenue(self) -> bool {
        !matches!(self, Self::Concluida | Self::Cancelada)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown lead status '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Contact channel
// ---------------------------------------------------------------------------

/// How the customer reached out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    #[default]
    Whatsapp,
    Email,
    Telefone,
    Outro,
}

impl ContactChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whatsapp => "whatsapp",
            Self::Email => "email",
            Self::Telefone => "telefone",
            Self::Outro => "outro",
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Dates and display helpers
// ---------------------------------------------------------------------------

/// Parse a pickup/return date as sent by the admin form.
///
/// Accepts a bare `YYYY-MM-DD` (read as midnight UTC) or a full RFC 3339
/// timestamp. Blank input means "no date".
pub fn parse_lead_date(input: &str) -> Result<Option<Timestamp>, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CoreError::Validation(format!("Invalid date '{trimmed}'")))?;
        return Ok(Some(midnight.and_utc()));
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| {
            CoreError::Validation(format!(
                "Invalid date '{trimmed}': expected YYYY-MM-DD or RFC 3339"
            ))
        })
}

fn parse_optional_date(input: Option<&str>) -> Result<Option<Timestamp>, CoreError> {
    match input {
        Some(s) => parse_lead_date(s),
        None => Ok(None),
    }
}

/// Short display code for a lead, e.g. `res-042`.
pub fn lead_code(id: DbId) -> String {
    format!("res-{:03}", id.rem_euclid(1000))
}

// ---------------------------------------------------------------------------
// Input DTOs
// ---------------------------------------------------------------------------

/// Payload for registering a new lead from the admin backend.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLead {
    #[validate(length(min = 1, max = 120, message = "customer_name is required"))]
    pub customer_name: String,
    #[validate(email, length(max = 160))]
    pub customer_email: Option<String>,
    #[validate(length(max = 40))]
    pub customer_phone: Option<String>,
    pub contact_channel: Option<ContactChannel>,
    pub status: Option<LeadStatus>,
    pub pickup_date: Option<String>,
    pub return_date: Option<String>,
    #[validate(length(max = 120))]
    pub pickup_location: Option<String>,
    #[validate(length(max = 120))]
    pub dropoff_location: Option<String>,
    pub car_id: Option<DbId>,
    #[validate(length(max = 4000))]
    pub message: Option<String>,
    #[validate(length(max = 4000))]
    pub notes: Option<String>,
}

/// A validated lead ready to be inserted, with defaults applied and dates
/// parsed.
#[derive(Debug, Clone)]
pub struct NewLead {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub contact_channel: ContactChannel,
    pub status: LeadStatus,
    pub pickup_date: Option<Timestamp>,
    pub return_date: Option<Timestamp>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub car_id: Option<DbId>,
    pub message: Option<String>,
    pub notes: Option<String>,
}

impl CreateLead {
    /// Apply defaults (`whatsapp`, `pendente`) and parse the date strings.
    pub fn resolve(self) -> Result<NewLead, CoreError> {
        Ok(NewLead {
            pickup_date: parse_optional_date(self.pickup_date.as_deref())?,
            return_date: parse_optional_date(self.return_date.as_deref())?,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            contact_channel: self.contact_channel.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            car_id: self.car_id,
            message: self.message,
            notes: self.notes,
        })
    }
}

/// Partial update for a lead. Nullable columns use `Option<Option<_>>` so a
/// JSON `null` clears them while an absent field leaves them unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLead {
    #[validate(length(min = 1, max = 40))]
    pub status: Option<String>,
    pub contact_channel: Option<ContactChannel>,
    #[validate(length(min = 1, max = 120))]
    pub customer_name: Option<String>,
    #[validate(length(max = 40))]
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub customer_phone: Option<Option<String>>,
    #[validate(email, length(max = 160))]
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub customer_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub pickup_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub return_date: Option<Option<String>>,
    #[validate(length(max = 120))]
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub pickup_location: Option<Option<String>>,
    #[validate(length(max = 120))]
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub dropoff_location: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub car_id: Option<Option<DbId>>,
    #[validate(length(max = 4000))]
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub message: Option<Option<String>>,
    #[validate(length(max = 4000))]
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub notes: Option<Option<String>>,
}

/// A validated partial update with dates parsed. Same absent/null/value
/// convention as [`UpdateLead`].
#[derive(Debug, Clone, Default)]
pub struct LeadChanges {
    pub status: Option<String>,
    pub contact_channel: Option<ContactChannel>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<Option<String>>,
    pub customer_email: Option<Option<String>>,
    pub pickup_date: Option<Option<Timestamp>>,
    pub return_date: Option<Option<Timestamp>>,
    pub pickup_location: Option<Option<String>>,
    pub dropoff_location: Option<Option<String>>,
    pub car_id: Option<Option<DbId>>,
    pub message: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl UpdateLead {
    /// Parse any provided date strings. An explicit `null` or blank string
    /// clears the date. A status label is trimmed and must not be blank.
    pub fn resolve(self) -> Result<LeadChanges, CoreError> {
        let status = match self.status {
            Some(label) => {
                let label = label.trim();
                if label.is_empty() {
                    return Err(CoreError::Validation("Lead status must not be blank".into()));
                }
                Some(label.to_string())
            }
            None => None,
        };
        let pickup_date = match self.pickup_date {
            Some(value) => Some(parse_optional_date(value.as_deref())?),
            None => None,
        };
        let return_date = match self.return_date {
            Some(value) => Some(parse_optional_date(value.as_deref())?),
            None => None,
        };

        Ok(LeadChanges {
            status,
            contact_channel: self.contact_channel,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            customer_email: self.customer_email,
            pickup_date,
            return_date,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            car_id: self.car_id,
            message: self.message,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    use super::*;

    fn minimal_lead() -> CreateLead {
        CreateLead {
            customer_name: "João Silva".to_string(),
            customer_email: None,
            customer_phone: None,
            contact_channel: None,
            status: None,
            pickup_date: None,
            return_date: None,
            pickup_location: None,
            dropoff_location: None,
            car_id: None,
            message: None,
            notes: None,
        }
    }

    #[test]
    fn status_strings_match_stored_labels() {
        let labels: Vec<_> = LeadStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            labels,
            ["pendente", "confirmada", "em_andamento", "concluida", "cancelada"]
        );
        for status in LeadStatus::ALL {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&LeadStatus::EmAndamento).unwrap();
        assert_eq!(json, "\"em_andamento\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_matches!("arquivada".parse::<LeadStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn open_and_revenue_classification() {
        assert!(LeadStatus::Pendente.is_open());
        assert!(LeadStatus::EmAndamento.is_open());
        assert!(!LeadStatus::Concluida.is_open());
        assert!(!LeadStatus::Cancelada.is_open());

        assert!(LeadStatus::Confirmada.counts_toward_revenue());
        assert!(!LeadStatus::Concluida.counts_toward_revenue());
        assert!(!LeadStatus::Cancelada.counts_toward_revenue());
    }

    #[test]
    fn parses_plain_date_as_utc_midnight() {
        let parsed = parse_lead_date("2026-03-14").unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_lead_date("2026-03-14T10:00:00+01:00").unwrap().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());
    }

    #[test]
    fn blank_date_is_none() {
        assert_eq!(parse_lead_date("   ").unwrap(), None);
    }

    #[test]
    fn garbage_date_is_a_validation_error() {
        assert_matches!(parse_lead_date("next friday"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn lead_code_uses_last_three_digits() {
        assert_eq!(lead_code(2), "res-002");
        assert_eq!(lead_code(1234), "res-234");
    }

    #[test]
    fn create_applies_defaults() {
        let lead = minimal_lead().resolve().unwrap();
        assert_eq!(lead.status, LeadStatus::Pendente);
        assert_eq!(lead.contact_channel, ContactChannel::Whatsapp);
        assert_eq!(lead.pickup_date, None);
    }

    #[test]
    fn create_rejects_bad_email() {
        let lead = CreateLead {
            customer_email: Some("not-an-email".to_string()),
            ..minimal_lead()
        };
        let errors = lead.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_email"));
    }

    #[test]
    fn create_rejects_long_name() {
        let lead = CreateLead {
            customer_name: "x".repeat(121),
            ..minimal_lead()
        };
        assert!(lead.validate().is_err());
    }

    #[test]
    fn update_distinguishes_clear_from_absent() {
        let patch: UpdateLead =
            serde_json::from_str(r#"{"notes": null, "pickup_date": "2026-01-02"}"#).unwrap();
        let changes = patch.resolve().unwrap();
        assert_eq!(changes.notes, Some(None));
        assert_eq!(changes.message, None);
        assert_eq!(
            changes.pickup_date,
            Some(Some(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap()))
        );
        assert_eq!(changes.return_date, None);
    }

    #[test]
    fn update_with_null_date_clears_it() {
        let patch: UpdateLead = serde_json::from_str(r#"{"return_date": null}"#).unwrap();
        assert_eq!(patch.resolve().unwrap().return_date, Some(None));
    }

    #[test]
    fn update_accepts_free_form_status_label() {
        let patch: UpdateLead =
            serde_json::from_str(r#"{"status": "  aguardando_pagamento "}"#).unwrap();
        assert!(patch.validate().is_ok());
        let changes = patch.resolve().unwrap();
        assert_eq!(changes.status.as_deref(), Some("aguardando_pagamento"));
    }

    #[test]
    fn update_status_label_length_is_bounded() {
        let empty = UpdateLead {
            status: Some(String::new()),
            ..UpdateLead::default()
        };
        assert!(empty.validate().unwrap_err().field_errors().contains_key("status"));

        let long = UpdateLead {
            status: Some("x".repeat(41)),
            ..UpdateLead::default()
        };
        assert!(long.validate().unwrap_err().field_errors().contains_key("status"));

        let blank = UpdateLead {
            status: Some("   ".to_string()),
            ..UpdateLead::default()
        };
        assert_matches!(blank.resolve(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_still_rejects_unknown_status() {
        let result = serde_json::from_str::<CreateLead>(
            r#"{"customer_name": "Ana", "status": "arquivada"}"#,
        );
        assert!(result.is_err());
    }
}
