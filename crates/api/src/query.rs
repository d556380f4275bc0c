//! Query parameter types shared by handler modules.

use serde::Deserialize;

/// `?status=&q=` for the admin lead listing.
///
/// `status` is kept as a string so an unknown value can be reported as a
/// validation error instead of a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct LeadListParams {
    pub status: Option<String>,
    pub q: Option<String>,
}

/// `?category=` for the public catalog.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
}

/// `?pickup_date=&return_date=` preferences carried into an inquiry message.
#[derive(Debug, Default, Deserialize)]
pub struct InquiryParams {
    pub pickup_date: Option<String>,
    pub return_date: Option<String>,
}
