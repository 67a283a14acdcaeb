// Data structures shared across the catalog pipeline and the routes.

use serde::{Deserialize, Serialize};

// One vehicle in the showcase catalog. The catalog is static for the
// process lifetime, so listings are never mutated after load.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Listing {
    pub id: u32,
    pub brand: String,
    pub model: String,
    pub year: u32,
    pub price: u64, // minor-unit-free, e.g. 85000 == $85,000
    pub mileage: String, // display text such as "15,000 km", no arithmetic
    pub location: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

// Card layout variant. Presentation only; the same fields render in both.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn is_grid(&self) -> bool {
        matches!(self, ViewMode::Grid)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ViewMode::List)
    }
}

// Raw query parameters accepted by the listing page and the listings API.
// Empty or absent values impose no constraint. Serialize is kept so
// pagination and view-toggle links can be rebuilt from the same struct.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ListingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>, // "min-max" range string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>, // compared as text against the listing year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<u32>, // listing id to pre-fill the contact form with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>, // acknowledgment key after a form submit
}

// Contact form fields. Field names must match the 'name' attributes in the
// HTML form inputs.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

// Sell-your-car form fields. Submissions are acknowledged and discarded;
// there is no review pipeline behind this.
#[derive(Debug, Deserialize)]
pub struct SellCarForm {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub mileage: Option<String>,
    pub description: Option<String>,
}
