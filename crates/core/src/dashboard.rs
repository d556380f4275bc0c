//! Aggregate figures for the admin dashboard.

use serde::Serialize;

use crate::lead::LeadStatus;
use crate::pricing::estimate_for;
use crate::types::Timestamp;

/// The parts of a lead the dashboard needs.
#[derive(Debug, Clone, Copy)]
pub struct LeadFigures {
    /// `None` when the stored label is not one of the known statuses.
    pub status: Option<LeadStatus>,
    pub pickup_date: Option<Timestamp>,
    pub return_date: Option<Timestamp>,
    /// Daily price of the linked car, if any.
    pub price_per_day: Option<i32>,
}

/// Counters shown in the dashboard stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadTotals {
    pub open_leads: i64,
    pub pending_leads: i64,
    pub estimated_revenue: i64,
}

/// Summarise leads into open/pending counts and the revenue estimate.
///
/// Revenue counts every lead that is neither finished nor cancelled and has
/// both a linked car and a positive rental length.
pub fn summarize_leads<'a, I>(leads: I) -> LeadTotals
where
    I: IntoIterator<Item = &'a LeadFigures>,
{
    let mut totals = LeadTotals::default();
    for lead in leads {
        let Some(status) = lead.status else {
            continue;
        };
        if status.is_open() {
            totals.open_leads += 1;
        }
        if status == LeadStatus::Pendente {
            totals.pending_leads += 1;
        }
        if status.counts_toward_revenue() {
            if let Some(estimate) =
                estimate_for(lead.pickup_date, lead.return_date, lead.price_per_day)
            {
                totals.estimated_revenue = totals.estimated_revenue.saturating_add(estimate);
            }
        }
    }
    totals
}
