// Pagination Window - the visible-count prefix over the filtered listing
// The count only grows within a session; changing facet selections leaves
// it untouched, and only a full reload resets it.

use serde::{Deserialize, Serialize};

/// Records shown when the listing first renders
pub const INITIAL_VISIBLE_COUNT: usize = 4;

/// Records added per "Show More"
pub const SHOW_MORE_STEP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationWindow {
    visible: usize,
}

impl PaginationWindow {
    pub fn new() -> Self {
        PaginationWindow {
            visible: INITIAL_VISIBLE_COUNT,
        }
    }

    pub fn with_visible(visible: usize) -> Self {
        PaginationWindow { visible }
    }

    /// The current visible-count cursor
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Grow the window by the fixed step
    pub fn show_more(&mut self) {
        self.visible += SHOW_MORE_STEP;
    }

    /// Full-reload path only
    pub fn reset(&mut self) {
        self.visible = INITIAL_VISIBLE_COUNT;
    }

    /// Prefix of the items covered by the window
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..items.len().min(self.visible)]
    }

    /// Whether a Show More control applies for this many items
    pub fn has_more(&self, total: usize) -> bool {
        total > self.visible
    }
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self::new()
    }
}
