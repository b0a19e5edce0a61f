//! Scroll message handlers
//!
//! All operate on the scroll state of the visible panel.

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_scroll_up(state: &mut AppState, rows: usize) -> UpdateResult {
    state.view.borrow_mut().scroll.scroll_up(rows);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState, rows: usize) -> UpdateResult {
    state.view.borrow_mut().scroll.scroll_down(rows);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.view.borrow_mut().scroll.page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.view.borrow_mut().scroll.page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.view.borrow_mut().scroll.scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.view.borrow_mut().scroll.scroll_to_bottom();
    UpdateResult::none()
}
