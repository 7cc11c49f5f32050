//! Filter to keep only selected categories.

use crate::traits::Filter;
use anyhow::Result;
use catalog::{Category, UserProfile, Venture};

/// Keeps ventures whose category is one of the allowed ones.
///
/// An empty allow-list keeps nothing.
pub struct CategoryFilter {
    categories: Vec<Category>,
}

impl CategoryFilter {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn apply(&self, ventures: Vec<Venture>, _profile: &UserProfile) -> Result<Vec<Venture>> {
        Ok(ventures
            .into_iter()
            .filter(|venture| self.categories.contains(&venture.category))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::create_venture;

    #[test]
    fn test_category_filter() {
        let ventures = vec![
            create_venture("1", Category::Beach, "Diani", 100.0),
            create_venture("2", Category::Safari, "Maasai Mara", 800.0),
            create_venture("3", Category::Wildlife, "Nairobi", 25.0),
        ];

        let filter = CategoryFilter::new([Category::Safari, Category::Wildlife]);
        let filtered = filter.apply(ventures, &UserProfile::new()).unwrap();

        let ids: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }
}
