//! Filter implementations for the venture pipeline.
//!
//! Each filter can be composed into a FilterPipeline and keeps the
//! surviving ventures in catalog order.

pub mod already_booked;
pub mod category;
pub mod keyword;
pub mod max_price;
pub mod occasion;
pub mod region;

pub use already_booked::AlreadyBookedFilter;
pub use category::CategoryFilter;
pub use keyword::KeywordFilter;
pub use max_price::MaxPriceFilter;
pub use occasion::OccasionFilter;
pub use region::RegionFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use catalog::{Category, Venture};

    pub fn create_venture(id: &str, category: Category, location: &str, price: f64) -> Venture {
        Venture {
            id: id.to_string(),
            title: format!("{} trip {}", category, id),
            category,
            location: location.to_string(),
            price,
            rating: 4.5,
            tags: vec![category.to_string()],
            activities: vec![],
            popularity: 50.0,
            seasonality: vec![],
            description: String::new(),
        }
    }
}
