use crate::models::Lounge;
use std::collections::HashSet;

/// Loaded lounge rows together with the sorted list of distinct card names.
///
/// Card names that differ only by case collapse to the spelling that sorts
/// first, so every name in the index selects all of its rows.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    lounges: Vec<Lounge>,
    card_names: Vec<String>,
}

impl CardCatalog {
    pub fn new(lounges: Vec<Lounge>) -> Self {
        let card_names = unique_card_names(&lounges);
        Self {
            lounges,
            card_names,
        }
    }

    /// All rows in file order
    pub fn lounges(&self) -> &[Lounge] {
        &self.lounges
    }

    /// Distinct card names, sorted
    pub fn card_names(&self) -> &[String] {
        &self.card_names
    }

    pub fn is_empty(&self) -> bool {
        self.lounges.is_empty()
    }

    /// Every row belonging to `card_name`, in file order
    pub fn lounges_for(&self, card_name: &str) -> Vec<Lounge> {
        self.lounges
            .iter()
            .filter(|lounge| lounge.belongs_to(card_name))
            .cloned()
            .collect()
    }
}

/// Sorted distinct card names; blank names are skipped.
pub fn unique_card_names(lounges: &[Lounge]) -> Vec<String> {
    let mut names: Vec<&str> = lounges
        .iter()
        .map(|lounge| lounge.card.as_str())
        .filter(|name| !name.trim().is_empty())
        .collect();
    names.sort_unstable();

    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}
