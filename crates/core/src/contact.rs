//! Outbound WhatsApp (`wa.me`) and `mailto:` deep links.
//!
//! The public site never submits reservations itself: visitors are handed a
//! pre-filled WhatsApp chat or e-mail draft addressed to the operator. All
//! builders here are deterministic so the frontend and the tests can rely on
//! exact output.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Strip everything but digits from an E.164-style phone number.
pub fn normalize_whatsapp(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/{digits}?text={message}`.
///
/// Returns `None` when the phone number contains no digits.
pub fn build_whatsapp_link(phone: &str, message: &str) -> Option<String> {
    let digits = normalize_whatsapp(phone);
    if digits.is_empty() {
        return None;
    }
    Some(format!(
        "https://wa.me/{digits}?text={}",
        encode_component(message)
    ))
}

/// `mailto:{email}?subject=..&body=..`.
///
/// Returns `None` when no address is configured.
pub fn build_mailto_link(email: &str, subject: &str, body: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }
    Some(format!(
        "mailto:{email}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    ))
}

// ---------------------------------------------------------------------------
// Message templates
// ---------------------------------------------------------------------------

/// Inputs for the per-car inquiry message on the catalog card.
#[derive(Debug, Clone)]
pub struct CarInquiry<'a> {
    pub site_name: &'a str,
    pub car_name: &'a str,
    pub year: i32,
    pub car_id: i64,
    pub pickup_date: Option<&'a str>,
    pub return_date: Option<&'a str>,
}

/// Message sent when a visitor asks about a specific car.
pub fn build_inquiry_message(inquiry: &CarInquiry<'_>) -> String {
    let mut lines = vec![
        format!("Olá! Vim pelo {}.", inquiry.site_name),
        format!(
            "Tenho interesse no veículo: {} ({}) (ID: {}).",
            inquiry.car_name, inquiry.year, inquiry.car_id
        ),
    ];
    if let Some(date) = non_blank(inquiry.pickup_date) {
        lines.push(format!("Levantamento (preferência): {date}"));
    }
    if let Some(date) = non_blank(inquiry.return_date) {
        lines.push(format!("Devolução (preferência): {date}"));
    }
    lines.push("Podem confirmar disponibilidade e condições? Obrigado!".to_string());
    lines.join("\n")
}

/// Subject line for a per-car e-mail inquiry.
pub fn inquiry_subject(car_name: &str) -> String {
    format!("Pedido de reserva: {car_name}")
}

/// Inputs from the public contact form. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ContactForm<'a> {
    pub site_name: &'a str,
    /// Already formatted as `Name (Year)`.
    pub car: Option<&'a str>,
    pub pickup_date: Option<&'a str>,
    pub return_date: Option<&'a str>,
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub message: Option<&'a str>,
}

/// Body of the contact-form WhatsApp message and e-mail. Blank fields are
/// left out.
pub fn build_contact_message(form: &ContactForm<'_>) -> String {
    let mut lines = vec![format!("Olá! Vim pelo site {}.", form.site_name)];
    let labelled = [
        ("Interesse", form.car),
        ("Retirada", form.pickup_date),
        ("Devolução", form.return_date),
        ("Nome", form.name),
        ("Telefone", form.phone),
        ("E-mail", form.email),
        ("Mensagem", form.message),
    ];
    for (label, value) in labelled {
        if let Some(value) = non_blank(value) {
            lines.push(format!("{label}: {value}"));
        }
    }
    lines.join("\n")
}

/// Subject of the contact-form e-mail.
pub fn contact_subject(car: Option<&str>) -> String {
    match non_blank(car) {
        Some(car) => inquiry_subject(car),
        None => "Pedido de informações".to_string(),
    }
}

/// Message behind the catalog's "talk about another car" button.
pub fn general_help_message(site_name: &str) -> String {
    format!("Olá! Vim pelo {site_name}. Preciso de ajuda para escolher um carro.")
}

/// A message together with the links that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLinks {
    pub message: String,
    pub whatsapp_url: Option<String>,
    pub mailto_url: Option<String>,
}

impl ContactLinks {
    /// Build both links for `message` using the operator's contact details.
    pub fn new(whatsapp_phone: &str, email: &str, subject: &str, message: String) -> Self {
        Self {
            whatsapp_url: build_whatsapp_link(whatsapp_phone, &message),
            mailto_url: build_mailto_link(email, subject, &message),
            message,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
