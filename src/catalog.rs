// The in-memory car catalog. Sample data lives in the binary; a JSON file
// can replace it via the catalog_path setting. The catalog never changes
// after load.

use crate::models::Listing;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

static BUILTIN: Lazy<Vec<Listing>> = Lazy::new(|| {
    vec![
        Listing {
            id: 1,
            brand: "BMW".to_string(),
            model: "M5".to_string(),
            year: 2024,
            price: 85000,
            mileage: "15,000 km".to_string(),
            location: "Doha, Qatar".to_string(),
            image: "https://images.unsplash.com/photo-1555215695-3004980ad54e?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80".to_string(),
            description: "Luxury sedan with exceptional performance".to_string(),
            features: vec![
                "Leather Seats".to_string(),
                "Navigation".to_string(),
                "Sunroof".to_string(),
                "Premium Sound System".to_string(),
            ],
        },
        Listing {
            id: 2,
            brand: "Mercedes".to_string(),
            model: "S-Class".to_string(),
            year: 2024,
            price: 95000,
            mileage: "10,000 km".to_string(),
            location: "Doha, Qatar".to_string(),
            image: "https://images.unsplash.com/photo-1618843479313-40f8afb4b4d8?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80".to_string(),
            description: "Ultimate luxury and comfort".to_string(),
            features: vec![
                "Massage Seats".to_string(),
                "360 Camera".to_string(),
                "Head-up Display".to_string(),
                "Driver Assistance".to_string(),
            ],
        },
        Listing {
            id: 3,
            brand: "Audi".to_string(),
            model: "RS7".to_string(),
            year: 2024,
            price: 120000,
            mileage: "5,000 km".to_string(),
            location: "Doha, Qatar".to_string(),
            image: "https://images.unsplash.com/photo-1503376780353-7e6692767b70?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80".to_string(),
            description: "Sporty performance with elegant design".to_string(),
            features: vec![
                "Sport Package".to_string(),
                "Carbon Fiber".to_string(),
                "Bang & Olufsen Sound".to_string(),
                "RS Sport Exhaust".to_string(),
            ],
        },
        Listing {
            id: 4,
            brand: "Toyota".to_string(),
            model: "Land Cruiser".to_string(),
            year: 2024,
            price: 75000,
            mileage: "20,000 km".to_string(),
            location: "Doha, Qatar".to_string(),
            image: "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80".to_string(),
            description: "Legendary SUV with ultimate reliability".to_string(),
            features: vec![
                "4x4".to_string(),
                "Multi-terrain Select".to_string(),
                "Crawl Control".to_string(),
                "Premium Interior".to_string(),
            ],
        },
    ]
});

#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    // The four sample listings shipped with the binary.
    pub fn builtin() -> Self {
        Catalog {
            listings: BUILTIN.clone(),
        }
    }

    // Parse a catalog from a JSON array of listings. Ids must be unique.
    pub fn from_json(json: &str) -> Result<Self> {
        let listings: Vec<Listing> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;

        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.id) {
                bail!("Duplicate listing id {} in catalog", listing.id);
            }
        }

        Ok(Catalog { listings })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid catalog file {}", path.display()))
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    // Lookup by id. Callers must handle the absent case; there is no
    // guarantee the id exists.
    pub fn get(&self, id: u32) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    // Distinct brands in catalog order, for the brand filter dropdown.
    pub fn brands(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.listings
            .iter()
            .filter(|listing| seen.insert(listing.brand.to_lowercase()))
            .map(|listing| listing.brand.clone())
            .collect()
    }

    // Distinct years in catalog order, for the year filter dropdown.
    pub fn years(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.listings
            .iter()
            .filter(|listing| seen.insert(listing.year))
            .map(|listing| listing.year)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut seen = HashSet::new();
        for listing in catalog.listings() {
            assert!(seen.insert(listing.id), "duplicate id {}", listing.id);
        }
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn get_resolves_known_id() {
        let catalog = Catalog::builtin();
        let bmw = catalog.get(1).unwrap();
        assert_eq!(bmw.brand, "BMW");
        assert_eq!(bmw.model, "M5");
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn from_json_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "brand": "BMW", "model": "M5", "year": 2024, "price": 85000,
             "mileage": "15,000 km", "location": "Doha, Qatar", "image": "x",
             "description": "a", "features": []},
            {"id": 1, "brand": "Audi", "model": "RS7", "year": 2024, "price": 120000,
             "mileage": "5,000 km", "location": "Doha, Qatar", "image": "y",
             "description": "b", "features": []}
        ]"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn from_json_accepts_missing_features() {
        let json = r#"[
            {"id": 7, "brand": "Nissan", "model": "Patrol", "year": 2023, "price": 60000,
             "mileage": "30,000 km", "location": "Doha, Qatar", "image": "x",
             "description": "Desert-ready SUV"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.get(7).unwrap().features.is_empty());
    }

    #[test]
    fn brands_and_years_are_distinct_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.brands(), vec!["BMW", "Mercedes", "Audi", "Toyota"]);
        assert_eq!(catalog.years(), vec![2024]);
    }
}
