//! Search widget state and the pure updates that drive it.
//!
//! The match list is recomputed from the catalog and the current input on
//! every change, so it never carries state of its own.

use crate::catalog::CardCatalog;
use crate::error::LoadResult;
use crate::models::Lounge;
use crate::search::{filter_card_names, SearchMode};
use log::{debug, error, info};

/// Progress of the one-shot data load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// A chosen card and all lounges it grants access to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub card_name: String,
    pub lounges: Vec<Lounge>,
}

/// Where the widget currently is in its interaction cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing,
    Matching,
    NoMatch,
    Selected,
}

#[derive(Debug, Default)]
pub struct SearchState {
    pub catalog: CardCatalog,
    pub load_status: LoadStatus,
    pub input: String,
    pub mode: SearchMode,
    pub matches: Vec<String>,
    pub no_results: bool,
    pub selection: Option<Selection>,
}

impl SearchState {
    /// Store the outcome of the data load. On failure the widget stays
    /// usable with an empty catalog.
    pub fn apply_load(&mut self, result: LoadResult<Vec<Lounge>>) {
        match result {
            Ok(lounges) => {
                self.catalog = CardCatalog::new(lounges);
                info!(
                    "Loaded {} lounge entries for {} cards",
                    self.catalog.lounges().len(),
                    self.catalog.card_names().len()
                );
                self.load_status = LoadStatus::Loaded;
                if !self.input.is_empty() {
                    self.refresh_matches();
                }
            }
            Err(e) => {
                error!("Error loading lounge data: {}", e);
                self.load_status = LoadStatus::Failed(e.to_string());
            }
        }
    }

    /// Handle a new value typed into the search box
    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        if self.input.is_empty() {
            self.matches.clear();
            self.no_results = false;
            self.selection = None;
            return;
        }
        self.refresh_matches();
    }

    /// Switch search mode and re-run the current search. A shown selection
    /// stays closed; the new mode applies from the next edit.
    pub fn set_mode(&mut self, mode: SearchMode) {
        if self.mode == mode {
            return;
        }
        let selected = self.phase() == Phase::Selected;
        self.mode = mode;
        if !selected && !self.input.is_empty() {
            self.refresh_matches();
        }
    }

    /// Choose a card from the match list and show its lounges
    pub fn select(&mut self, card_name: &str) {
        let lounges = self.catalog.lounges_for(card_name);
        info!("Selected {} ({} lounges)", card_name, lounges.len());

        self.selection = Some(Selection {
            card_name: card_name.to_string(),
            lounges,
        });
        self.input = card_name.to_string();
        self.matches.clear();
        self.no_results = false;
    }

    /// Whether the "no lounge access" message should be on screen. Hidden
    /// until the data has arrived, since an empty catalog matches nothing.
    pub fn show_no_results(&self) -> bool {
        self.no_results && !self.input.is_empty() && self.load_status != LoadStatus::Loading
    }

    pub fn phase(&self) -> Phase {
        if self.input.is_empty() {
            return Phase::Idle;
        }
        if let Some(selection) = &self.selection {
            if selection.card_name == self.input {
                return Phase::Selected;
            }
        }
        if self.load_status == LoadStatus::Loading {
            Phase::Typing
        } else if !self.matches.is_empty() {
            Phase::Matching
        } else if self.no_results {
            Phase::NoMatch
        } else {
            Phase::Typing
        }
    }

    fn refresh_matches(&mut self) {
        debug!("Searching card names for '{}'", self.input);
        self.matches = filter_card_names(&self.catalog, &self.input, self.mode);
        self.no_results = self.matches.is_empty();
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
