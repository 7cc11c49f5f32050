//! # Catalog Crate
//!
//! Venture catalog model, loading, and lookups.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Venture, Category, BudgetTier, Occasion, UserProfile)
//! - **parser**: JSON files and price labels into Rust structs
//! - **index**: Validated [`Catalog`] with id/category indices and browse queries
//! - **seed**: Built-in venture packs and Kenya venues
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Category};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/ventures.json"))?;
//! let safaris = catalog.by_category(Category::Safari);
//! let cheap = catalog.within_price(100.0);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod seed;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use types::{BudgetTier, Category, Occasion, UserProfile, Venture, VentureId};
