//! Site-wide key/value settings and the operator's contact details.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;

pub const SITE_NAME: &str = "site_name";
pub const CONTACT_WHATSAPP_E164: &str = "contact_whatsapp_e164";
pub const CONTACT_EMAIL: &str = "contact_email";
pub const CONTACT_PHONE_DISPLAY: &str = "contact_phone_display";
pub const CONTACT_CITY: &str = "contact_city";

/// Every setting key the backend understands.
pub const KNOWN_KEYS: [&str; 5] = [
    SITE_NAME,
    CONTACT_WHATSAPP_E164,
    CONTACT_EMAIL,
    CONTACT_PHONE_DISPLAY,
    CONTACT_CITY,
];

/// Maximum length of a stored setting value.
pub const MAX_VALUE_LEN: usize = 500;

/// Reject keys outside [`KNOWN_KEYS`] and oversized values.
pub fn validate_setting(key: &str, value: &str) -> Result<(), CoreError> {
    if !KNOWN_KEYS.contains(&key) {
        return Err(CoreError::Validation(format!("Unknown setting '{key}'")));
    }
    if value.chars().count() > MAX_VALUE_LEN {
        return Err(CoreError::Validation(format!(
            "Setting '{key}' must be at most {MAX_VALUE_LEN} characters"
        )));
    }
    Ok(())
}

/// The operator's public contact details.
///
/// Used both as configured fallbacks (from the environment) and as the
/// resolved view served to the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteContact {
    pub site_name: String,
    pub whatsapp_e164: String,
    pub email: String,
    pub phone_display: String,
    pub city: String,
}

impl Default for SiteContact {
    fn default() -> Self {
        Self {
            site_name: "RC Veículos".to_string(),
            whatsapp_e164: String::new(),
            email: String::new(),
            phone_display: String::new(),
            city: "São Tomé".to_string(),
        }
    }
}

impl SiteContact {
    /// Overlay stored settings on top of `fallback`. Blank stored values do
    /// not override a fallback.
    pub fn resolve(stored: &HashMap<String, String>, fallback: &SiteContact) -> Self {
        let pick = |key: &str, default: &str| {
            stored
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };
        Self {
            site_name: pick(SITE_NAME, &fallback.site_name),
            whatsapp_e164: pick(CONTACT_WHATSAPP_E164, &fallback.whatsapp_e164),
            email: pick(CONTACT_EMAIL, &fallback.email),
            phone_display: pick(CONTACT_PHONE_DISPLAY, &fallback.phone_display),
            city: pick(CONTACT_CITY, &fallback.city),
        }
    }

    /// The details as `(key, value)` pairs, in [`KNOWN_KEYS`] order.
    pub fn as_pairs(&self) -> [(&'static str, &str); 5] {
        [
            (SITE_NAME, self.site_name.as_str()),
            (CONTACT_WHATSAPP_E164, self.whatsapp_e164.as_str()),
            (CONTACT_EMAIL, self.email.as_str()),
            (CONTACT_PHONE_DISPLAY, self.phone_display.as_str()),
            (CONTACT_CITY, self.city.as_str()),
        ]
    }
}
