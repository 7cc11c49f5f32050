//! Parsing for catalog and profile files.
//!
//! Files are JSON:
//! - ventures: an array of [`Venture`] objects
//! - profiles: a single [`UserProfile`] object, or an array of them for neighbors
//!
//! Venture prices may be plain numbers or the display labels the booking site
//! used ("$120", "$15-25", "Free"); see [`parse_price_label`].

use crate::error::{CatalogError, Result};
use crate::types::{UserProfile, Venture};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Turn a price label into a number.
///
/// - `"Free"` (any case) is 0
/// - otherwise every `$<digits>` amount is collected and the largest wins,
///   so `"$120"` is 120 and `"$20 - $150"` is 150
/// - amounts without their own `$` are ignored: `"$15-25"` is 15
/// - a bare number such as `"80"` is accepted as-is
pub fn parse_price_label(label: &str) -> Result<f64> {
    let trimmed = label.trim();
    if trimmed.eq_ignore_ascii_case("free") {
        return Ok(0.0);
    }
    if let Ok(amount) = trimmed.parse::<f64>()
        && amount.is_finite()
    {
        return Ok(amount);
    }

    let mut highest: Option<f64> = None;
    let mut rest = trimmed;
    while let Some(pos) = rest.find('$') {
        rest = &rest[pos + 1..];
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            continue;
        }
        // A run of ASCII digits always parses
        if let Ok(amount) = digits.parse::<f64>() {
            highest = Some(highest.map_or(amount, |h: f64| h.max(amount)));
        }
        rest = &rest[digits.len()..];
    }

    highest.ok_or_else(|| CatalogError::InvalidPrice(label.to_string()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceField {
    Amount(f64),
    Label(String),
}

/// Serde adapter for [`Venture::price`].
pub(crate) fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceField::deserialize(deserializer)? {
        PriceField::Amount(amount) => Ok(amount),
        PriceField::Label(label) => parse_price_label(&label).map_err(de::Error::custom),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    parse_json(&content, &path.display().to_string())
}

/// Parse JSON text, tagging errors with `origin` (a file name or "built-in").
pub fn parse_json<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| CatalogError::Json {
        file: origin.to_string(),
        source,
    })
}

/// Parse a ventures file (JSON array).
pub fn parse_ventures(path: &Path) -> Result<Vec<Venture>> {
    read_json(path)
}

/// Parse a single traveller profile.
pub fn parse_profile(path: &Path) -> Result<UserProfile> {
    let profile: UserProfile = read_json(path)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a list of neighbor profiles.
pub fn parse_profiles(path: &Path) -> Result<Vec<UserProfile>> {
    let profiles: Vec<UserProfile> = read_json(path)?;
    for profile in &profiles {
        validate_profile(profile)?;
    }
    Ok(profiles)
}

/// Ratings must be whole stars from 1 to 5.
pub fn validate_profile(profile: &UserProfile) -> Result<()> {
    for (id, &stars) in &profile.ratings {
        if !(1..=5).contains(&stars) {
            return Err(CatalogError::Validation(format!(
                "rating for venture {} must be 1-5, got {}",
                id, stars
            )));
        }
    }
    Ok(())
}
