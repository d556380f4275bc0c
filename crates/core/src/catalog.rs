//! Public catalog rules: which cars are listed and how categories are
//! offered as filters.

use crate::car::{AvailabilityStatus, KNOWN_CATEGORIES};

/// Pseudo-category that shows every listable car.
pub const ALL_CATEGORIES: &str = "Todos";

/// A car is listed publicly only while active and available.
pub fn is_listable(is_active: bool, availability_status: &str) -> bool {
    is_active && availability_status == AvailabilityStatus::Available.as_str()
}

/// Build the category filter list from the categories of listable cars.
///
/// The result always starts with [`ALL_CATEGORIES`], followed by distinct,
/// trimmed, non-empty categories sorted case-insensitively. When no listable
/// car has a category the known defaults are offered instead.
pub fn categories<'a, I>(listable_categories: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found: Vec<String> = Vec::new();
    for category in listable_categories {
        let category = category.trim();
        if !category.is_empty() && !found.iter().any(|c| c == category) {
            found.push(category.to_string());
        }
    }

    if found.is_empty() {
        found = KNOWN_CATEGORIES.iter().map(|c| c.to_string()).collect();
    }

    found.sort_by_key(|c| c.to_lowercase());

    let mut out = Vec::with_capacity(found.len() + 1);
    out.push(ALL_CATEGORIES.to_string());
    out.extend(found);
    out
}

/// Resolve the requested category against the available ones. Unknown or
/// missing selections fall back to [`ALL_CATEGORIES`].
pub fn resolve_category<'a>(requested: Option<&'a str>, available: &[String]) -> &'a str {
    match requested.map(str::trim) {
        Some(c) if available.iter().any(|a| a == c) => c,
        _ => ALL_CATEGORIES,
    }
}

/// Whether a car of `category` is shown under the `selected` filter.
pub fn matches_category(selected: &str, category: &str) -> bool {
    selected == ALL_CATEGORIES || category.trim() == selected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_available_cars_are_listed() {
        assert!(is_listable(true, "available"));
        assert!(!is_listable(false, "available"));
        assert!(!is_listable(true, "maintenance"));
        assert!(!is_listable(true, "unavailable"));
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let cats = categories(["Sedan", "SUV", " Sedan ", "", "compacto"]);
        assert_eq!(cats, ["Todos", "compacto", "Sedan", "SUV"]);
    }

    #[test]
    fn empty_inventory_uses_known_categories() {
        let cats = categories(std::iter::empty());
        assert_eq!(cats[0], ALL_CATEGORIES);
        assert_eq!(cats.len(), KNOWN_CATEGORIES.len() + 1);
        assert!(cats.iter().any(|c| c == "Pickup"));
    }

    #[test]
    fn unknown_selection_falls_back_to_all() {
        let cats = categories(["SUV"]);
        assert_eq!(resolve_category(Some("SUV"), &cats), "SUV");
        assert_eq!(resolve_category(Some("Limousine"), &cats), ALL_CATEGORIES);
        assert_eq!(resolve_category(None, &cats), ALL_CATEGORIES);
    }

    #[test]
    fn all_matches_everything() {
        assert!(matches_category(ALL_CATEGORIES, "SUV"));
        assert!(matches_category("SUV", "SUV"));
        assert!(!matches_category("SUV", "Sedan"));
    }
}
