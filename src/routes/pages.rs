// The server-rendered listing page and the stubbed form submissions.

use askama::Template;
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    contact,
    error::AppError,
    filter::FilterCriteria,
    models::{ContactForm, ListingQuery, SellCarForm, ViewMode},
    pagination::{page_slice, PageInfo, PAGE_SIZE},
    render,
    view::ViewState,
    AppState,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    // echoed filter inputs
    q: String,
    brand: String,
    price: String,
    year: String,
    // filter dropdown options derived from the catalog
    brands: Vec<String>,
    years: Vec<u32>,
    // pipeline output
    cards: String,
    total: usize,
    // view state and pagination controls
    view: ViewMode,
    page: usize,
    total_pages: usize,
    has_prev: bool,
    has_next: bool,
    prev_href: String,
    next_href: String,
    grid_href: String,
    list_href: String,
    // contact prefill and post-submit acknowledgment
    interest: String,
    notice: Option<String>,
}

// Rebuild a page link carrying the current filters but a different
// page/view. Transient parameters (interest, notice) are dropped so they
// don't stick to navigation.
fn listing_href(params: &ListingQuery, state: ViewState) -> Result<String, AppError> {
    let mut next = params.clone();
    next.page = Some(state.page);
    next.view = Some(state.view);
    next.interest = None;
    next.notice = None;

    let query = serde_urlencoded::to_string(&next)
        .map_err(|e| AppError::Internal(anyhow::Error::new(e)))?;
    Ok(format!("/?{}", query))
}

fn notice_text(key: &str) -> Option<&'static str> {
    match key {
        "contact" => Some("Thank you for your message. We will contact you soon!"),
        "listing" => Some("Thank you for listing your car. Our team will review your submission and contact you soon!"),
        _ => None,
    }
}

// Handler for GET /
pub async fn listing_page(
    State(app_state): State<AppState>,
    Query(params): Query<ListingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let criteria = FilterCriteria::from_params(&params);
    let state = ViewState::from_params(&params);

    let filtered = criteria.apply(app_state.catalog.listings());
    if !criteria.is_unconstrained() {
        tracing::debug!(
            "Filter narrowed catalog to {} of {} listings.",
            filtered.len(),
            app_state.catalog.len()
        );
    }

    let info = PageInfo::new(state.page, filtered.len());
    let page_items = page_slice(&filtered, state.page, PAGE_SIZE);
    let cards = render::render_cards(page_items, state.view)?;

    // Derive the link targets through the view-state transitions so the
    // guards live in one place.
    let mut prev_state = state;
    prev_state.prev_page();
    let mut next_state = state;
    next_state.next_page(info.total_pages);
    let mut grid_state = state;
    grid_state.set_view(ViewMode::Grid);
    let mut list_state = state;
    list_state.set_view(ViewMode::List);

    // Resolve the contact prefill; an unknown id is skipped, not an error.
    let interest = match params.interest {
        Some(id) => match app_state.catalog.get(id) {
            Some(listing) => contact::interest_message(listing),
            None => {
                tracing::warn!("Contact prefill requested for unknown listing id {}", id);
                String::new()
            }
        },
        None => String::new(),
    };

    let notice = params
        .notice
        .as_deref()
        .and_then(notice_text)
        .map(String::from);

    let template = IndexTemplate {
        q: params.q.clone().unwrap_or_default(),
        brand: params.brand.clone().unwrap_or_default(),
        price: params.price.clone().unwrap_or_default(),
        year: params.year.clone().unwrap_or_default(),
        brands: app_state.catalog.brands(),
        years: app_state.catalog.years(),
        cards,
        total: filtered.len(),
        view: state.view,
        page: state.page,
        total_pages: info.total_pages,
        has_prev: info.has_prev(),
        has_next: info.has_next(),
        prev_href: listing_href(&params, prev_state)?,
        next_href: listing_href(&params, next_state)?,
        grid_href: listing_href(&params, grid_state)?,
        list_href: listing_href(&params, list_state)?,
        interest,
        notice,
    };

    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render listing template: {}", e);
            Err(AppError::Internal(anyhow::Error::new(e)))
        }
    }
}

// Handler for POST /contact. No delivery happens; the submission is logged
// and acknowledged.
pub async fn submit_contact(Form(form): Form<ContactForm>) -> impl IntoResponse {
    tracing::info!(
        "Contact form received from {} <{}> ({} chars).",
        form.name,
        form.email,
        form.message.len()
    );
    Redirect::to("/?notice=contact#contact")
}

// Handler for POST /sell. Same stub: acknowledge and discard.
pub async fn submit_listing(Form(form): Form<SellCarForm>) -> impl IntoResponse {
    tracing::info!(
        "Sell-car submission received: {} {} ({}).",
        form.brand,
        form.model,
        form.year
    );
    Redirect::to("/?notice=listing#sell")
}
