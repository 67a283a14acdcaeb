// Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

// Declare submodules for different route groups
mod api;
mod pages;

// create_router accepts the AppState; the state is provided here and the
// combined router is consumed in main.rs.
pub fn create_router(app_state: AppState) -> Router {
    // JSON API over the same filter/paginate pipeline as the page.
    let api_router = Router::new()
        .route("/listings", get(api::search_listings))
        .route("/listings/:id", get(api::get_listing))
        .route("/brands", get(api::get_brands))
        .route("/contact/:id", post(api::contact_dealer))
        .with_state(app_state.clone());

    Router::new()
        // The listing page and the stubbed form submissions
        .route("/", get(pages::listing_page))
        .route("/contact", post(pages::submit_contact))
        .route("/sell", post(pages::submit_listing))
        // Nest the API router which already has state
        .nest("/api", api_router)
        .with_state(app_state)
}
