// Handlers for backend API endpoints

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Serialize;

use crate::{
    contact,
    error::AppError,
    filter::FilterCriteria,
    models::{Listing, ListingQuery},
    pagination::{page_slice, PageInfo, PAGE_SIZE},
    view::ViewState,
    AppState,
};

// --- Response Wrappers ---

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    success: bool,
    listings: Vec<Listing>,
    total: usize,
    page: usize,
    total_pages: usize,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenericResponse {
    success: bool,
    message: Option<String>,
    id: Option<u32>,
    error: Option<String>,
}

// --- API Handlers ---

// GET /api/listings: the filter/paginate pipeline as JSON.
pub async fn search_listings(
    State(app_state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<Json<ListingsResponse>, AppError> {
    tracing::info!("[HANDLER] /api/listings - Request received.");

    let criteria = FilterCriteria::from_params(&params);
    let state = ViewState::from_params(&params);

    let filtered = criteria.apply(app_state.catalog.listings());
    let info = PageInfo::new(state.page, filtered.len());
    let listings: Vec<Listing> = page_slice(&filtered, state.page, PAGE_SIZE)
        .iter()
        .map(|listing| (*listing).clone())
        .collect();

    tracing::info!(
        "[HANDLER] /api/listings - Returning {} of {} matches (page {}/{}).",
        listings.len(),
        filtered.len(),
        info.page,
        info.total_pages
    );

    Ok(Json(ListingsResponse {
        success: true,
        listings,
        total: filtered.len(),
        page: info.page,
        total_pages: info.total_pages,
        error: None,
    }))
}

// GET /api/listings/:id
pub async fn get_listing(
    State(app_state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Listing>, AppError> {
    tracing::info!("[HANDLER] /api/listings/:id - Request received for id {}.", id);

    match app_state.catalog.get(id) {
        Some(listing) => Ok(Json(listing.clone())),
        None => Err(AppError::NotFound(format!("listing {}", id))),
    }
}

// GET /api/brands: distinct brands in catalog order.
pub async fn get_brands(State(app_state): State<AppState>) -> Json<Vec<String>> {
    let brands = app_state.catalog.brands();
    tracing::info!("[HANDLER] /api/brands - Returning {} brands.", brands.len());
    Json(brands)
}

// POST /api/contact/:id: compose the dealer-interest message for a listing.
pub async fn contact_dealer(
    State(app_state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<GenericResponse>, AppError> {
    tracing::info!("[HANDLER] /api/contact/:id - Request received for id {}.", id);

    match app_state.catalog.get(id) {
        Some(listing) => Ok(Json(GenericResponse {
            success: true,
            message: Some(contact::interest_message(listing)),
            id: Some(id),
            error: None,
        })),
        None => Err(AppError::NotFound(format!("listing {}", id))),
    }
}
