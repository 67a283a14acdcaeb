// Card rendering: a pure mapping from Listing + ViewMode to an HTML card.
// No field validation happens here; the templates escape by default.

use crate::models::{Listing, ViewMode};
use askama::Template;

#[derive(Template)]
#[template(path = "card_grid.html")]
struct GridCard<'a> {
    car: &'a Listing,
}

#[derive(Template)]
#[template(path = "card_list.html")]
struct ListCard<'a> {
    car: &'a Listing,
}

pub fn render_card(car: &Listing, view: ViewMode) -> Result<String, askama::Error> {
    match view {
        ViewMode::Grid => GridCard { car }.render(),
        ViewMode::List => ListCard { car }.render(),
    }
}

pub fn render_cards(cars: &[&Listing], view: ViewMode) -> Result<String, askama::Error> {
    let mut out = String::new();
    for car in cars {
        out.push_str(&render_card(car, view)?);
        out.push('\n');
    }
    Ok(out)
}

// Currency-agnostic thousands grouping: 85000 -> "85,000".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// Template filters, resolved by the askama derive in this module.
mod filters {
    pub fn money(value: &u64) -> askama::Result<String> {
        Ok(super::group_thousands(*value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(8500), "8,500");
        assert_eq!(group_thousands(85000), "85,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn grid_card_carries_every_field() {
        let catalog = Catalog::builtin();
        let bmw = catalog.get(1).unwrap();
        let html = render_card(bmw, ViewMode::Grid).unwrap();

        assert!(html.contains("BMW M5"));
        assert!(html.contains("$85,000"));
        assert!(html.contains("2024"));
        assert!(html.contains("15,000 km"));
        assert!(html.contains("Doha, Qatar"));
        assert!(html.contains("Luxury sedan with exceptional performance"));
        assert!(html.contains("Leather Seats"));
        // CTA bound to the listing id
        assert!(html.contains("interest=1"));
        assert!(!html.contains("list-view"));
    }

    #[test]
    fn list_card_splits_info_and_actions() {
        let catalog = Catalog::builtin();
        let audi = catalog.get(3).unwrap();
        let html = render_card(audi, ViewMode::List).unwrap();

        assert!(html.contains("list-view"));
        assert!(html.contains("car-info"));
        assert!(html.contains("car-actions"));
        assert!(html.contains("$120,000"));
        assert!(html.contains("interest=3"));
    }

    #[test]
    fn feature_block_is_omitted_when_empty() {
        let catalog = Catalog::builtin();
        let mut car = catalog.get(4).unwrap().clone();
        car.features.clear();

        for view in [ViewMode::Grid, ViewMode::List] {
            let html = render_card(&car, view).unwrap();
            assert!(!html.contains("car-features"));
            assert!(!html.contains("feature-tag"));
        }
    }

    #[test]
    fn one_tag_per_feature_in_order() {
        let catalog = Catalog::builtin();
        let toyota = catalog.get(4).unwrap();
        let html = render_card(toyota, ViewMode::Grid).unwrap();

        assert_eq!(html.matches("feature-tag").count(), toyota.features.len());
        let crawl = html.find("Crawl Control").unwrap();
        let four_by_four = html.find("4x4").unwrap();
        assert!(four_by_four < crawl);
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = Catalog::builtin();
        let cars: Vec<&Listing> = catalog.listings().iter().collect();
        let first = render_cards(&cars, ViewMode::List).unwrap();
        let second = render_cards(&cars, ViewMode::List).unwrap();
        assert_eq!(first, second);
    }
}
