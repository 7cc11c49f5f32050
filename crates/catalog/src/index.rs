//! The indexed, validated venture catalog.
//!
//! [`Catalog`] owns its ventures in insertion order and keeps two lookups on
//! the side: id -> position and category -> positions. It also answers the
//! browse-style queries the booking site offered (by region, keyword search,
//! top rated, price ceiling, occasion).

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::{Category, Occasion, UserProfile, Venture};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// A validated collection of ventures with id and category indices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ventures: Vec<Venture>,
    by_id: HashMap<String, usize>,
    by_category: HashMap<Category, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog, validating every venture.
    ///
    /// Fails on duplicate ids and on negative or non-finite price, rating,
    /// or popularity.
    pub fn new(ventures: Vec<Venture>) -> Result<Self> {
        let mut catalog = Catalog {
            ventures: Vec::with_capacity(ventures.len()),
            by_id: HashMap::with_capacity(ventures.len()),
            by_category: HashMap::new(),
        };
        for venture in ventures {
            catalog.insert(venture)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file of ventures.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading venture catalog from {:?}", path);
        let catalog = Self::new(parser::parse_ventures(path)?)?;
        info!("Loaded {} ventures", catalog.len());
        Ok(catalog)
    }

    /// Load a catalog and the neighbor profiles that go with it, in parallel.
    pub fn load_bundle(
        ventures_path: &Path,
        neighbors_path: &Path,
    ) -> Result<(Self, Vec<UserProfile>)> {
        let (catalog, neighbors) = rayon::join(
            || Self::load_from_file(ventures_path),
            || parser::parse_profiles(neighbors_path),
        );
        Ok((catalog?, neighbors?))
    }

    /// Insert one venture, keeping indices in sync.
    pub fn insert(&mut self, venture: Venture) -> Result<()> {
        validate_venture(&venture)?;
        if self.by_id.contains_key(&venture.id) {
            return Err(CatalogError::DuplicateId(venture.id));
        }

        let position = self.ventures.len();
        self.by_id.insert(venture.id.clone(), position);
        self.by_category
            .entry(venture.category)
            .or_default()
            .push(position);
        self.ventures.push(venture);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Venture> {
        self.by_id.get(id).map(|&position| &self.ventures[position])
    }

    pub fn len(&self) -> usize {
        self.ventures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ventures.is_empty()
    }

    /// All ventures in insertion order.
    pub fn ventures(&self) -> &[Venture] {
        &self.ventures
    }

    pub fn iter(&self) -> impl Iterator<Item = &Venture> {
        self.ventures.iter()
    }

    pub fn into_ventures(self) -> Vec<Venture> {
        self.ventures
    }

    pub fn by_category(&self, category: Category) -> Vec<&Venture> {
        self.by_category
            .get(&category)
            .map(|positions| positions.iter().map(|&p| &self.ventures[p]).collect())
            .unwrap_or_default()
    }

    /// Ventures whose location contains `region`, ignoring case.
    pub fn by_region(&self, region: &str) -> Vec<&Venture> {
        self.iter().filter(|v| v.in_region(region)).collect()
    }

    /// Keyword search across title, description, and activities.
    pub fn search(&self, query: &str) -> Vec<&Venture> {
        let results: Vec<&Venture> = self.iter().filter(|v| v.matches_keyword(query)).collect();
        debug!("Search {:?} matched {} ventures", query, results.len());
        results
    }

    /// Highest rated first; equal ratings keep catalog order.
    pub fn top_rated(&self, limit: usize) -> Vec<&Venture> {
        let mut ranked: Vec<&Venture> = self.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(limit);
        ranked
    }

    /// Ventures priced at or below `max_price`.
    pub fn within_price(&self, max_price: f64) -> Vec<&Venture> {
        self.iter().filter(|v| v.price <= max_price).collect()
    }

    /// Ventures suited to an occasion, best rated first.
    pub fn for_occasion(&self, occasion: Occasion) -> Vec<&Venture> {
        let mut matches: Vec<&Venture> =
            self.iter().filter(|v| v.suits_occasion(occasion)).collect();
        matches.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        matches
    }

    /// Same as [`Catalog::for_occasion`] but from a free-text label.
    /// Unknown occasions return nothing.
    pub fn for_occasion_label(&self, label: &str) -> Vec<&Venture> {
        Occasion::from_label(label)
            .map(|occasion| self.for_occasion(occasion))
            .unwrap_or_default()
    }
}

fn validate_venture(venture: &Venture) -> Result<()> {
    let numeric = [
        ("price", venture.price),
        ("rating", venture.rating),
        ("popularity", venture.popularity),
    ];
    for (field, value) in numeric {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::InvalidValue {
                id: venture.id.clone(),
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
