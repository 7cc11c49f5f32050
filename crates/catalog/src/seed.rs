//! Built-in catalogs shipped with the crate.
//!
//! - [`venture_packs`]: the twelve curated venture packs sold on the booking site
//! - [`kenya_venues`]: the Kenya venue list the venue feed serves
//!
//! Both are embedded JSON, parsed and validated on every call so callers get a
//! fresh, independently owned [`Catalog`].

use crate::error::Result;
use crate::index::Catalog;
use crate::parser;
use crate::types::{UserProfile, Venture};

const VENTURE_PACKS: &str = include_str!("../data/ventures.json");
const KENYA_VENUES: &str = include_str!("../data/venues.json");
const SAMPLE_PROFILE: &str = include_str!("../data/profile.json");
const SAMPLE_NEIGHBORS: &str = include_str!("../data/neighbors.json");

pub fn venture_packs() -> Result<Catalog> {
    let ventures: Vec<Venture> = parser::parse_json(VENTURE_PACKS, "built-in ventures")?;
    Catalog::new(ventures)
}

pub fn kenya_venues() -> Result<Catalog> {
    let ventures: Vec<Venture> = parser::parse_json(KENYA_VENUES, "built-in venues")?;
    Catalog::new(ventures)
}

/// A demo traveller: romantic/adventure trips on a mid-range budget.
pub fn sample_profile() -> Result<UserProfile> {
    let profile: UserProfile = parser::parse_json(SAMPLE_PROFILE, "built-in profile")?;
    parser::validate_profile(&profile)?;
    Ok(profile)
}

/// Demo neighbor profiles for collaborative adjustment.
pub fn sample_neighbors() -> Result<Vec<UserProfile>> {
    let profiles: Vec<UserProfile> = parser::parse_json(SAMPLE_NEIGHBORS, "built-in neighbors")?;
    for profile in &profiles {
        parser::validate_profile(profile)?;
    }
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BudgetTier, Category};

    #[test]
    fn test_venture_packs_load() {
        let catalog = venture_packs().unwrap();
        assert_eq!(catalog.len(), 12);

        let lamu = catalog.get("7").unwrap();
        assert_eq!(lamu.category, Category::Romance);
        assert_eq!(lamu.price, 280.0);
    }

    #[test]
    fn test_kenya_venues_parse_price_ranges() {
        let catalog = kenya_venues().unwrap();
        assert_eq!(catalog.len(), 12);

        assert_eq!(catalog.get("karura-forest").unwrap().price, 0.0);
        assert_eq!(catalog.get("giraffe-centre").unwrap().price, 15.0);
        assert_eq!(catalog.get("maasai-mara").unwrap().price, 200.0);
        assert_eq!(catalog.by_category(Category::Safari).len(), 3);
    }

    #[test]
    fn test_kenya_venues_price_ceiling_ignores_unmarked_upper_bounds() {
        let catalog = kenya_venues().unwrap();
        // "$15-25" and "$20-150" read as 15 and 20
        let cheap: Vec<&str> = catalog
            .within_price(20.0)
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(cheap, vec!["giraffe-centre", "karura-forest", "diani-beach"]);
    }

    #[test]
    fn test_sample_profiles_load() {
        let profile = sample_profile().unwrap();
        assert_eq!(profile.budget_tier, Some(BudgetTier::MidRange));
        assert_eq!(profile.rating_for("1"), Some(5));

        let neighbors = sample_neighbors().unwrap();
        assert_eq!(neighbors.len(), 3);
    }
}
