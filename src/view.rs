// View state: the current page and card layout for one rendered listing
// widget. Decoded from request query parameters, so each request owns its
// own copy; there is no ambient mutable state.

use crate::models::{ListingQuery, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub page: usize,
    pub view: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            page: 1,
            view: ViewMode::Grid,
        }
    }
}

impl ViewState {
    // A missing page parameter lands on page 1, which is also what a filter
    // form submit produces (the form carries no page input).
    pub fn from_params(params: &ListingQuery) -> Self {
        ViewState {
            page: params.page.unwrap_or(1).max(1),
            view: params.view.unwrap_or_default(),
        }
    }

    // Switching layouts never touches the page; the result set size does
    // not depend on the view mode.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    // Advance only while more filtered pages exist. The page-count guard
    // uses the filtered total in both directions.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_page_one_grid() {
        let state = ViewState::default();
        assert_eq!(state.page, 1);
        assert_eq!(state.view, ViewMode::Grid);
    }

    #[test]
    fn prev_page_at_one_is_a_noop() {
        let mut state = ViewState::default();
        state.prev_page();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn view_toggle_preserves_the_page() {
        let mut state = ViewState { page: 3, view: ViewMode::Grid };
        state.set_view(ViewMode::List);
        state.set_view(ViewMode::Grid);
        assert_eq!(state.page, 3);
        assert_eq!(state.view, ViewMode::Grid);
    }

    #[test]
    fn next_page_is_clamped_to_the_filtered_total() {
        let mut state = ViewState::default();
        state.next_page(3);
        assert_eq!(state.page, 2);
        state.next_page(3);
        state.next_page(3);
        assert_eq!(state.page, 3);

        // no pages at all: stay put
        let mut state = ViewState::default();
        state.next_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn from_params_defaults_and_floors() {
        let state = ViewState::from_params(&ListingQuery::default());
        assert_eq!(state, ViewState::default());

        let state = ViewState::from_params(&ListingQuery {
            page: Some(0),
            view: Some(ViewMode::List),
            ..ListingQuery::default()
        });
        assert_eq!(state.page, 1);
        assert_eq!(state.view, ViewMode::List);
    }
}
