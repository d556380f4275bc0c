//! Idempotent demo data: the first admin account, contact settings, sample
//! cars and sample leads.
//!
//! Each group is only inserted when missing, so running the seed twice
//! leaves the database unchanged.

use anyhow::{bail, Context};
use carhire_core::car::{AvailabilityStatus, CreateCar};
use carhire_core::lead::{ContactChannel, LeadStatus, NewLead};
use carhire_core::settings::{
    CONTACT_CITY, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, CONTACT_WHATSAPP_E164, SITE_NAME,
};
use carhire_db::models::admin_user::CreateAdminUser;
use carhire_db::repositories::{AdminUserRepo, CarRepo, LeadRepo, SettingRepo};
use chrono::{Duration, Utc};
use sqlx::PgPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};

/// Role given to the seeded account.
const OWNER_ROLE: &str = "owner";

/// Inputs for [`run`], usually read from the environment.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub admin_email: String,
    pub admin_password: String,
    pub admin_name: String,
    /// `(key, value)` settings inserted when the key is missing.
    pub settings: Vec<(&'static str, String)>,
}

impl SeedConfig {
    /// Read the seed inputs from the environment.
    ///
    /// | Env Var                 | Default               |
    /// |-------------------------|-----------------------|
    /// | `ADMIN_EMAIL`           | `admin@example.com`   |
    /// | `ADMIN_PASSWORD`        | `admin123`            |
    /// | `ADMIN_NAME`            | `Admin`               |
    /// | `SITE_NAME`             | `RC Veículos`         |
    /// | `CONTACT_WHATSAPP_E164` | `+2399000000`         |
    /// | `CONTACT_EMAIL`         | `contato@example.com` |
    /// | `CONTACT_PHONE_DISPLAY` | `+239 900 0000`       |
    /// | `CONTACT_CITY`          | `São Tomé`            |
    pub fn from_env() -> Self {
        let env = |name: &str, fallback: &str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            admin_email: env("ADMIN_EMAIL", "admin@example.com"),
            admin_password: env("ADMIN_PASSWORD", "admin123"),
            admin_name: env("ADMIN_NAME", "Admin"),
            settings: vec![
                (SITE_NAME, env("SITE_NAME", "RC Veículos")),
                (CONTACT_WHATSAPP_E164, env("CONTACT_WHATSAPP_E164", "+2399000000")),
                (CONTACT_EMAIL, env("CONTACT_EMAIL", "contato@example.com")),
                (CONTACT_PHONE_DISPLAY, env("CONTACT_PHONE_DISPLAY", "+239 900 0000")),
                (CONTACT_CITY, env("CONTACT_CITY", "São Tomé")),
            ],
        }
    }
}

/// What a [`run`] inserted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub admin_created: bool,
    pub settings_inserted: usize,
    pub cars_inserted: usize,
    pub leads_inserted: usize,
}

/// Insert whatever demo data is missing.
pub async fn run(pool: &PgPool, config: &SeedConfig) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    // --- Admin ---
    let email = config.admin_email.trim().to_lowercase();
    if AdminUserRepo::find_by_email(pool, &email).await?.is_none() {
        if let Err(msg) = validate_password_strength(&config.admin_password, MIN_PASSWORD_LENGTH) {
            bail!("ADMIN_PASSWORD rejected: {msg}");
        }
        let password_hash = hash_password(&config.admin_password)
            .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?;
        AdminUserRepo::create(
            pool,
            &CreateAdminUser {
                name: config.admin_name.clone(),
                email: email.clone(),
                password_hash,
                role: OWNER_ROLE.to_string(),
            },
        )
        .await
        .context("Failed to create admin user")?;
        tracing::info!(email = %email, "Admin created");
        report.admin_created = true;
    } else {
        tracing::info!(email = %email, "Admin already exists");
    }

    // --- Settings ---
    for (key, value) in &config.settings {
        if SettingRepo::insert_if_missing(pool, key, value).await? {
            report.settings_inserted += 1;
        }
    }

    // --- Cars ---
    let car_count = CarRepo::count(pool, false).await?;
    if car_count == 0 {
        for car in sample_cars() {
            CarRepo::create(pool, &car).await?;
            report.cars_inserted += 1;
        }
        tracing::info!(count = report.cars_inserted, "Sample cars inserted");
    } else {
        tracing::info!(car_count, "Cars already present, skipping");
    }

    // --- Leads ---
    let lead_count = LeadRepo::count(pool).await?;
    if lead_count == 0 {
        // Oldest active cars first.
        let mut cars = CarRepo::list_admin(pool).await?;
        cars.retain(|c| c.is_active);
        cars.reverse();
        let first = cars.first().map(|c| c.id);
        let second = cars.get(1).map(|c| c.id);

        for lead in sample_leads(first, second) {
            LeadRepo::create(pool, &lead).await?;
            report.leads_inserted += 1;
        }
        tracing::info!(count = report.leads_inserted, "Sample leads inserted");
    } else {
        tracing::info!(lead_count, "Leads already present, skipping");
    }

    Ok(report)
}

#[allow(clippy::too_many_arguments)]
fn car(
    name: &str,
    category: &str,
    image: &str,
    passengers: i32,
    transmission: &str,
    fuel: &str,
    price_per_day: i32,
    featured: bool,
    description: &str,
) -> CreateCar {
    CreateCar {
        name: name.to_string(),
        category: category.to_string(),
        image_url: Some(image.to_string()),
        passengers,
        transmission: transmission.to_string(),
        fuel: fuel.to_string(),
        price_per_day,
        featured: Some(featured),
        availability_status: Some(AvailabilityStatus::Available),
        year: 2024,
        description: Some(description.to_string()),
        is_active: Some(true),
    }
}

fn sample_cars() -> Vec<CreateCar> {
    vec![
        car(
            "Range Rover Sport",
            "SUV",
            "/images/car-suv.jpg",
            5,
            "Automático",
            "Gasolina",
            450,
            true,
            "SUV de luxo com conforto incomparável e desempenho superior.",
        ),
        car(
            "Mercedes-Benz Classe E",
            "Sedan",
            "/images/car-sedan.jpg",
            5,
            "Automático",
            "Híbrido",
            380,
            false,
            "Sedan executivo com tecnologia de ponta e elegância atemporal.",
        ),
        car(
            "Porsche 911 Carrera",
            "Esportivo",
            "/images/car-sports.jpg",
            2,
            "Automático",
            "Gasolina",
            750,
            true,
            "O icônico esportivo alemão com performance de tirar o fôlego.",
        ),
        car(
            "Ford Ranger Raptor",
            "Pickup",
            "/images/car-pickup.jpg",
            5,
            "Automático",
            "Diesel",
            320,
            false,
            "Pickup robusta para qualquer terreno com potência e estilo.",
        ),
        car(
            "Volkswagen Golf GTI",
            "Compacto",
            "/images/car-compact.jpg",
            5,
            "Manual",
            "Gasolina",
            250,
            false,
            "Compacto esportivo com muita diversão ao volante.",
        ),
    ]
}

fn sample_leads(first_car: Option<i64>, second_car: Option<i64>) -> Vec<NewLead> {
    let now = Utc::now();
    vec![
        NewLead {
            customer_name: "João Silva".to_string(),
            customer_email: Some("joao@example.com".to_string()),
            customer_phone: Some("+239 9xx xxx xxx".to_string()),
            contact_channel: ContactChannel::Whatsapp,
            status: LeadStatus::Pendente,
            pickup_date: Some(now + Duration::days(2)),
            return_date: Some(now + Duration::days(5)),
            pickup_location: Some("Centro".to_string()),
            dropoff_location: Some("Aeroporto".to_string()),
            car_id: first_car,
            message: Some("Quero confirmar disponibilidade e preço para esses dias.".to_string()),
            notes: Some("Cliente pediu resposta rápida.".to_string()),
        },
        NewLead {
            customer_name: "Maria Costa".to_string(),
            customer_email: Some("maria@example.com".to_string()),
            customer_phone: Some("+239 9yy yyy yyy".to_string()),
            contact_channel: ContactChannel::Email,
            status: LeadStatus::Confirmada,
            pickup_date: Some(now + Duration::days(7)),
            return_date: Some(now + Duration::days(10)),
            pickup_location: Some("Hotel".to_string()),
            dropoff_location: Some("Hotel".to_string()),
            car_id: second_car,
            message: Some("Gostaria de reservar, pode enviar detalhes por email.".to_string()),
            notes: None,
        },
    ]
}
