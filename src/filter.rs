// Filter evaluation over the catalog. Criteria are derived per request from
// the raw query parameters; unset fields impose no constraint and the
// predicates compose with logical AND. Output preserves catalog order.

use crate::models::{Listing, ListingQuery};

// Price bounds parsed from a "min-max" range string. Lower bound is
// inclusive, upper bound exclusive. A missing or malformed lower bound
// degrades to 0, a missing or malformed upper bound to unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    fn parse(raw: &str) -> Self {
        let (min_str, max_str) = match raw.split_once('-') {
            Some((min, max)) => (min, Some(max)),
            None => (raw, None),
        };
        PriceRange {
            min: min_str.trim().parse().unwrap_or(0),
            max: max_str.and_then(|s| s.trim().parse().ok()),
        }
    }

    fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    query: Option<String>, // lowercased free-text query
    brand: Option<String>, // lowercased exact brand
    price: Option<PriceRange>,
    year: Option<String>, // compared as text
}

// Treat empty and whitespace-only inputs as unset.
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl FilterCriteria {
    pub fn from_params(params: &ListingQuery) -> Self {
        FilterCriteria {
            query: active(&params.q).map(str::to_lowercase),
            brand: active(&params.brand).map(str::to_lowercase),
            price: active(&params.price).map(PriceRange::parse),
            year: active(&params.year).map(str::to_string),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(ref query) = self.query {
            let hit = listing.brand.to_lowercase().contains(query)
                || listing.model.to_lowercase().contains(query)
                || listing.description.to_lowercase().contains(query);
            if !hit {
                return false;
            }
        }

        if let Some(ref brand) = self.brand {
            if listing.brand.to_lowercase() != *brand {
                return false;
            }
        }

        if let Some(range) = self.price {
            if !range.contains(listing.price) {
                return false;
            }
        }

        if let Some(ref year) = self.year {
            if listing.year.to_string() != *year {
                return false;
            }
        }

        true
    }

    // Order-preserving subsequence of the catalog satisfying every active
    // predicate.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings
            .iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}
