//! Unauthenticated endpoints behind the marketing site: the car catalog,
//! the operator's contact details, and pre-filled WhatsApp/e-mail links.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use carhire_core::catalog::{categories, matches_category, resolve_category};
use carhire_core::contact::{
    build_contact_message, build_inquiry_message, contact_subject, general_help_message,
    inquiry_subject, CarInquiry, ContactForm, ContactLinks,
};
use carhire_core::lead::parse_lead_date;
use carhire_core::pricing::{estimate_for, rental_days};
use carhire_core::settings::SiteContact;
use carhire_core::types::DbId;
use carhire_db::models::car::Car;
use carhire_db::repositories::{CarRepo, SettingRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::{CatalogParams, InquiryParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Subject of the general help e-mail.
const HELP_SUBJECT: &str = "Pedido de informações";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A car as shown on the public site.
#[derive(Debug, Serialize)]
pub struct PublicCar {
    #[serde(flatten)]
    pub car: Car,
    /// Human label for the availability status.
    pub availability_label: &'static str,
}

impl From<Car> for PublicCar {
    fn from(car: Car) -> Self {
        let availability_label = car.availability().map(|s| s.label()).unwrap_or_default();
        Self {
            car,
            availability_label,
        }
    }
}

/// Catalog page payload.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<String>,
    pub active_category: String,
    pub cars: Vec<PublicCar>,
}

/// Contact details plus the general "help me choose" links.
#[derive(Debug, Serialize)]
pub struct ContactInfo {
    #[serde(flatten)]
    pub contact: SiteContact,
    pub help: ContactLinks,
}

/// Links for asking about one car.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub car_id: DbId,
    #[serde(flatten)]
    pub links: ContactLinks,
    /// Present when both preferred dates parse and span at least one day.
    pub rental_days: Option<i64>,
    pub estimated_total: Option<i64>,
}

/// Body of `POST /public/contact-links`. Every field is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ContactFormRequest {
    pub car_id: Option<DbId>,
    #[validate(length(max = 40))]
    pub pickup_date: Option<String>,
    #[validate(length(max = 40))]
    pub return_date: Option<String>,
    #[validate(length(max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 40))]
    pub phone: Option<String>,
    #[validate(length(max = 160))]
    pub email: Option<String>,
    #[validate(length(max = 4000))]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/public/cars
///
/// Active cars, featured first then newest first.
pub async fn list_cars(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cars = CarRepo::list_public(&state.pool).await?;
    let data: Vec<PublicCar> = cars.into_iter().map(PublicCar::from).collect();
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/public/catalog?category=
///
/// Listable cars filtered by category, with the category filter list. An
/// unknown or missing category shows everything.
pub async fn catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<impl IntoResponse> {
    let listable: Vec<Car> = CarRepo::list_public(&state.pool)
        .await?
        .into_iter()
        .filter(Car::is_listable)
        .collect();

    let categories = categories(listable.iter().map(|c| c.category.as_str()));
    let active = resolve_category(params.category.as_deref(), &categories).to_string();

    let cars = listable
        .into_iter()
        .filter(|c| matches_category(&active, &c.category))
        .map(PublicCar::from)
        .collect();

    Ok(Json(DataResponse {
        data: CatalogResponse {
            categories,
            active_category: active,
            cars,
        },
    }))
}

/// GET /api/v1/public/contact
pub async fn contact(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let contact = site_contact(&state).await?;
    let help = ContactLinks::new(
        &contact.whatsapp_e164,
        &contact.email,
        HELP_SUBJECT,
        general_help_message(&contact.site_name),
    );

    Ok(Json(DataResponse {
        data: ContactInfo { contact, help },
    }))
}

/// GET /api/v1/public/cars/{id}/inquiry?pickup_date=&return_date=
///
/// Pre-filled links for asking about an active car.
pub async fn car_inquiry(
    State(state): State<AppState>,
    Path(car_id): Path<DbId>,
    Query(params): Query<InquiryParams>,
) -> AppResult<impl IntoResponse> {
    let car = CarRepo::find_active(&state.pool, car_id)
        .await?
        .ok_or(AppError::not_found("Car", car_id))?;
    let contact = site_contact(&state).await?;

    let message = build_inquiry_message(&CarInquiry {
        site_name: &contact.site_name,
        car_name: &car.name,
        year: car.year,
        car_id: car.id,
        pickup_date: params.pickup_date.as_deref(),
        return_date: params.return_date.as_deref(),
    });
    let links = ContactLinks::new(
        &contact.whatsapp_e164,
        &contact.email,
        &inquiry_subject(&car.name),
        message,
    );

    // Unparseable preferences are still quoted in the message, just not priced.
    let pickup = lenient_date(params.pickup_date.as_deref());
    let dropoff = lenient_date(params.return_date.as_deref());

    tracing::debug!(car_id, "Inquiry links built");

    Ok(Json(DataResponse {
        data: InquiryResponse {
            car_id: car.id,
            links,
            rental_days: rental_days(pickup, dropoff),
            estimated_total: estimate_for(pickup, dropoff, Some(car.price_per_day)),
        },
    }))
}

/// POST /api/v1/public/contact-links
///
/// Compose the contact-form message and its links. An unknown or inactive
/// `car_id` is left out of the message.
pub async fn contact_links(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ContactFormRequest>,
) -> AppResult<impl IntoResponse> {
    let car_label = match input.car_id {
        Some(id) => CarRepo::find_active(&state.pool, id)
            .await?
            .map(|car| car.display_name()),
        None => None,
    };
    let contact = site_contact(&state).await?;

    let message = build_contact_message(&ContactForm {
        site_name: &contact.site_name,
        car: car_label.as_deref(),
        pickup_date: input.pickup_date.as_deref(),
        return_date: input.return_date.as_deref(),
        name: input.name.as_deref(),
        phone: input.phone.as_deref(),
        email: input.email.as_deref(),
        message: input.message.as_deref(),
    });
    let links = ContactLinks::new(
        &contact.whatsapp_e164,
        &contact.email,
        &contact_subject(car_label.as_deref()),
        message,
    );

    Ok(Json(DataResponse { data: links }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Stored settings layered over the configured defaults.
async fn site_contact(state: &AppState) -> AppResult<SiteContact> {
    let stored = SettingRepo::as_map(&state.pool).await?;
    Ok(SiteContact::resolve(&stored, &state.config.site))
}

fn lenient_date(input: Option<&str>) -> Option<carhire_core::types::Timestamp> {
    input.and_then(|s| parse_lead_date(s).ok().flatten())
}
