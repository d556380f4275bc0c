//! Serde helpers for admin form fields that may arrive as strings.
//!
//! HTML forms post every value as text, so `"450"` and `"true"` are accepted
//! alongside JSON numbers and booleans:
//!
//! - `#[serde(deserialize_with = "crate::coerce::int")]` for a required `i32`
//! - `#[serde(default, deserialize_with = "crate::coerce::opt_int")]` for `Option<i32>`
//! - `#[serde(default, deserialize_with = "crate::coerce::opt_bool")]` for `Option<bool>`
//!
//! Numeric strings are trimmed and must hold a whole number in `i32` range.
//! Boolean strings are `true`/`false`, `1`/`0` or `on`/`off`, in any case.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Unexpected, Visitor};

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a boolean or one of \"true\", \"false\", \"1\", \"0\", \"on\", \"off\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" => Ok(true),
            "false" | "0" | "off" => Ok(false),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }
}

struct LenientInt(i32);

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(IntVisitor).map(LenientInt)
    }
}

struct LenientBool(bool);

impl<'de> Deserialize<'de> for LenientBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoolVisitor).map(LenientBool)
    }
}

pub fn int<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IntVisitor)
}

pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LenientInt>::deserialize(deserializer).map(|v| v.map(|LenientInt(n)| n))
}

pub fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LenientBool>::deserialize(deserializer).map(|v| v.map(|LenientBool(b)| b))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(deserialize_with = "super::int")]
        seats: i32,
        #[serde(default, deserialize_with = "super::opt_int")]
        price: Option<i32>,
        #[serde(default, deserialize_with = "super::opt_bool")]
        featured: Option<bool>,
    }

    fn parse(json: &str) -> Result<Form, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn numbers_and_booleans_pass_through() {
        let form = parse(r#"{"seats": 5, "price": 250, "featured": true}"#).unwrap();
        assert_eq!(form.seats, 5);
        assert_eq!(form.price, Some(250));
        assert_eq!(form.featured, Some(true));
    }

    #[test]
    fn numeric_and_boolean_strings_are_coerced() {
        let form = parse(r#"{"seats": " 7 ", "price": "-3", "featured": "FALSE"}"#).unwrap();
        assert_eq!(form.seats, 7);
        assert_eq!(form.price, Some(-3));
        assert_eq!(form.featured, Some(false));

        assert_eq!(parse(r#"{"seats": "1", "featured": "on"}"#).unwrap().featured, Some(true));
        assert_eq!(parse(r#"{"seats": "1", "featured": "0"}"#).unwrap().featured, Some(false));
    }

    #[test]
    fn absent_and_null_optionals_are_none() {
        let form = parse(r#"{"seats": 2, "price": null}"#).unwrap();
        assert_eq!(form.price, None);
        assert_eq!(form.featured, None);
    }

    #[test]
    fn non_numeric_and_fractional_strings_are_rejected() {
        assert!(parse(r#"{"seats": "five"}"#).is_err());
        assert!(parse(r#"{"seats": "4.5"}"#).is_err());
        assert!(parse(r#"{"seats": ""}"#).is_err());
        assert!(parse(r#"{"seats": 4.5}"#).is_err());
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert!(parse(r#"{"seats": 2147483648}"#).is_err());
        assert!(parse(r#"{"seats": "2147483648"}"#).is_err());
        assert!(parse(r#"{"seats": 1, "price": -2147483649}"#).is_err());
    }

    #[test]
    fn unknown_boolean_words_are_rejected() {
        assert!(parse(r#"{"seats": 1, "featured": "maybe"}"#).is_err());
        assert!(parse(r#"{"seats": 1, "featured": 1}"#).is_err());
    }
}
