// Composing the dealer-interest message. Pure text composition; the routes
// decide where the message ends up (contact form prefill or API response).

use crate::models::Listing;

pub fn interest_message(listing: &Listing) -> String {
    format!(
        "I'm interested in the {} {} {}",
        listing.year, listing.brand, listing.model
    )
}
