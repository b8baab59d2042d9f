use super::store::{StoreKey, SuggestionStore};

/// Maximum number of suggestions to display in the popup.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// State for one suggestion popup, bound to a single input and store key.
///
/// Two flavors exist: live-filtering (the chat input narrows the list on
/// every keystroke) and non-live (modal fields show the full list on focus).
pub struct SuggestState {
    key: StoreKey,
    live_filter: bool,
    items: Vec<String>,
    filtered_indices: Vec<usize>,
    selected: Option<usize>,
    visible: bool,
}

impl SuggestState {
    pub fn new(key: StoreKey, live_filter: bool) -> Self {
        Self {
            key,
            live_filter,
            items: Vec::new(),
            filtered_indices: Vec::new(),
            selected: None,
            visible: false,
        }
    }

    pub fn key(&self) -> StoreKey {
        self.key
    }

    /// Reload from disk and show. Live popups filter by the input's current
    /// value; non-live popups always show the full list. Hides itself when
    /// nothing matches.
    pub fn show_on_focus(&mut self, store: &SuggestionStore, input: &str) {
        let filter = if self.live_filter { input } else { "" };
        self.refresh(store, filter);
    }

    /// Re-filter on a keystroke (live popups only; no-op otherwise).
    pub fn refilter(&mut self, store: &SuggestionStore, input: &str) {
        if self.live_filter {
            self.refresh(store, input);
        }
    }

    fn refresh(&mut self, store: &SuggestionStore, filter: &str) {
        self.items = store.load(self.key);
        self.filtered_indices = filter_indices(&self.items, filter);
        self.selected = None;
        self.visible = !self.filtered_indices.is_empty();
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    /// Move the selection down, starting at the top on first press.
    pub fn select_next(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1) % self.filtered_indices.len(),
        });
    }

    /// Move the selection up, starting at the bottom on first press.
    pub fn select_previous(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        let len = self.filtered_indices.len();
        self.selected = Some(match self.selected {
            None => len - 1,
            Some(0) => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The entry to insert when the user accepts the selection.
    pub fn selected_entry(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.filtered_indices.get(i))
            .and_then(|&idx| self.items.get(idx))
            .map(String::as_str)
    }

    /// Visible (filtered) entries with their display indices, capped at
    /// [`MAX_VISIBLE_SUGGESTIONS`].
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &str)> {
        self.filtered_indices
            .iter()
            .take(MAX_VISIBLE_SUGGESTIONS)
            .enumerate()
            .filter_map(|(display_idx, &entry_idx)| {
                self.items.get(entry_idx).map(|e| (display_idx, e.as_str()))
            })
    }
}

/// Case-insensitive substring match; an empty filter matches everything.
fn filter_indices(items: &[String], filter: &str) -> Vec<usize> {
    if filter.is_empty() {
        return (0..items.len()).collect();
    }

    let needle = filter.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}
