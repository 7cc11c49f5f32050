//! Core domain types for venture catalogs and traveller profiles.
//!
//! A [`Venture`] is one bookable travel package. A [`UserProfile`] is what the
//! traveller told us about themselves. Both are plain data: scoring reads them
//! and never writes back.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable identifier of a venture within a catalog ("1", "maasai-mara", ...)
pub type VentureId = String;

// =============================================================================
// Category
// =============================================================================

/// Closed set of venture categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Beach,
    Safari,
    Cultural,
    Adventure,
    #[serde(alias = "Romantic")]
    Romance,
    Food,
    Wildlife,
    Urban,
    Wellness,
    Nature,
    Marine,
    Conservation,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Beach,
        Category::Safari,
        Category::Cultural,
        Category::Adventure,
        Category::Romance,
        Category::Food,
        Category::Wildlife,
        Category::Urban,
        Category::Wellness,
        Category::Nature,
        Category::Marine,
        Category::Conservation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Beach => "Beach",
            Category::Safari => "Safari",
            Category::Cultural => "Cultural",
            Category::Adventure => "Adventure",
            Category::Romance => "Romance",
            Category::Food => "Food",
            Category::Wildlife => "Wildlife",
            Category::Urban => "Urban",
            Category::Wellness => "Wellness",
            Category::Nature => "Nature",
            Category::Marine => "Marine",
            Category::Conservation => "Conservation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, so "safari" and "SAFARI" both work from the command line.
impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("romantic") {
            return Ok(Category::Romance);
        }
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Budget tiers
// =============================================================================

/// Spending tier a traveller selects. Ranges overlap on purpose so an item
/// near a boundary still fits two neighboring tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    Budget,
    MidRange,
    Luxury,
    UltraLuxury,
}

impl BudgetTier {
    /// Inclusive `(min, max)` price range for the tier.
    pub fn range(&self) -> (f64, f64) {
        match self {
            BudgetTier::Budget => (0.0, 100.0),
            BudgetTier::MidRange => (50.0, 300.0),
            BudgetTier::Luxury => (200.0, 1000.0),
            BudgetTier::UltraLuxury => (500.0, 5000.0),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::MidRange => "mid-range",
            BudgetTier::Luxury => "luxury",
            BudgetTier::UltraLuxury => "ultra-luxury",
        }
    }

    /// Parse a tier label. Labels are matched exactly; anything else is `None`.
    pub fn from_label(label: &str) -> Option<BudgetTier> {
        match label {
            "budget" => Some(BudgetTier::Budget),
            "mid-range" => Some(BudgetTier::MidRange),
            "luxury" => Some(BudgetTier::Luxury),
            "ultra-luxury" => Some(BudgetTier::UltraLuxury),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Occasions
// =============================================================================

/// Trip purposes that map onto catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Romantic,
    Adventure,
    Family,
    Honeymoon,
    Anniversary,
}

impl Occasion {
    /// Case-insensitive lookup; unknown occasions are `None`.
    pub fn from_label(label: &str) -> Option<Occasion> {
        match label.trim().to_lowercase().as_str() {
            "romantic" => Some(Occasion::Romantic),
            "adventure" => Some(Occasion::Adventure),
            "family" => Some(Occasion::Family),
            "honeymoon" => Some(Occasion::Honeymoon),
            "anniversary" => Some(Occasion::Anniversary),
            _ => None,
        }
    }

    /// Categories suited to the occasion, most fitting first.
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Occasion::Romantic => &[Category::Beach, Category::Cultural, Category::Safari],
            Occasion::Adventure => &[Category::Adventure, Category::Safari, Category::Wildlife],
            Occasion::Family => &[Category::Wildlife, Category::Nature, Category::Beach],
            Occasion::Honeymoon => &[Category::Beach, Category::Safari, Category::Cultural],
            Occasion::Anniversary => &[Category::Cultural, Category::Beach, Category::Conservation],
        }
    }
}

// =============================================================================
// Venture
// =============================================================================

/// One bookable travel package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venture {
    pub id: VentureId,
    pub title: String,
    pub category: Category,
    pub location: String,
    /// Price in a currency-agnostic unit. Accepts numbers or labels like "$120".
    #[serde(deserialize_with = "crate::parser::deserialize_price")]
    pub price: f64,
    /// Conventionally 0-5
    pub rating: f64,
    /// Ordered labels matched against profile vibes
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    /// Conventionally 0-100
    #[serde(default)]
    pub popularity: f64,
    /// Carried through for callers; scoring ignores it.
    #[serde(default)]
    pub seasonality: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Venture {
    /// Case-insensitive substring match on the location ("nairobi" finds "Karen, Nairobi").
    pub fn in_region(&self, region: &str) -> bool {
        self.location.to_lowercase().contains(&region.to_lowercase())
    }

    /// Case-insensitive keyword match on title, description, or any activity.
    pub fn matches_keyword(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self
                .activities
                .iter()
                .any(|activity| activity.to_lowercase().contains(&query))
    }

    pub fn suits_occasion(&self, occasion: Occasion) -> bool {
        occasion.categories().contains(&self.category)
    }
}

impl AsRef<Venture> for Venture {
    fn as_ref(&self) -> &Venture {
        self
    }
}

// =============================================================================
// User profile
// =============================================================================

/// A traveller's stated preferences plus their booking history.
///
/// Neighbor profiles used for collaborative adjustment have the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub occasion_types: Vec<String>,
    /// `None` when the tier is missing or not one of the four known labels.
    #[serde(
        default,
        alias = "budget_range",
        deserialize_with = "lenient_budget_tier"
    )]
    pub budget_tier: Option<BudgetTier>,
    #[serde(default)]
    pub vibes: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub past_bookings: Vec<VentureId>,
    /// Venture id -> stars given (1-5)
    #[serde(default)]
    pub ratings: HashMap<VentureId, u8>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget_tier(mut self, tier: BudgetTier) -> Self {
        self.budget_tier = Some(tier);
        self
    }

    pub fn with_vibes<I, S>(mut self, vibes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vibes = vibes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_occasions<I, S>(mut self, occasions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.occasion_types = occasions.into_iter().map(Into::into).collect();
        self
    }

    /// Record a past booking together with the rating the traveller gave it.
    pub fn with_booking(mut self, id: impl Into<VentureId>, rating: u8) -> Self {
        let id = id.into();
        self.past_bookings.push(id.clone());
        self.ratings.insert(id, rating);
        self
    }

    /// Occasions we know how to map; unknown labels are skipped.
    pub fn occasions(&self) -> Vec<Occasion> {
        self.occasion_types
            .iter()
            .filter_map(|label| Occasion::from_label(label))
            .collect()
    }

    pub fn has_booked(&self, id: &str) -> bool {
        self.past_bookings.iter().any(|booked| booked == id)
    }

    /// Rating the traveller gave a venture, if any.
    pub fn rating_for(&self, id: &str) -> Option<u8> {
        self.ratings.get(id).copied()
    }
}

fn lenient_budget_tier<'de, D>(deserializer: D) -> Result<Option<BudgetTier>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(BudgetTier::from_label))
}
