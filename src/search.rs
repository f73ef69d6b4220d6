use crate::catalog::CardCatalog;
use std::collections::HashSet;

/// How the search box input is matched against card names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Every whitespace-separated word must appear somewhere in the name,
    /// in any order.
    #[default]
    AllTerms,
    /// The whole input must appear as one substring of the name.
    Substring,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::AllTerms => "Match all words",
            SearchMode::Substring => "Match exact phrase",
        }
    }

    pub fn all() -> &'static [SearchMode] {
        &[SearchMode::AllTerms, SearchMode::Substring]
    }
}

/// Lowercased search terms for `input` under `mode`
pub fn search_terms(input: &str, mode: SearchMode) -> Vec<String> {
    let lower = input.to_lowercase();
    match mode {
        SearchMode::AllTerms => lower.split_whitespace().map(str::to_string).collect(),
        SearchMode::Substring => vec![lower],
    }
}

/// True if the lowercased `candidate` contains every term
pub fn matches_terms(candidate: &str, terms: &[String]) -> bool {
    let candidate = candidate.to_lowercase();
    terms.iter().all(|term| candidate.contains(term.as_str()))
}

/// Card names from `catalog` matching `input`.
///
/// In `AllTerms` mode the candidates are the sorted distinct names. In
/// `Substring` mode they are the rows' card names in file order, each name
/// listed once. Empty input matches nothing.
pub fn filter_card_names(catalog: &CardCatalog, input: &str, mode: SearchMode) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let terms = search_terms(input, mode);
    match mode {
        SearchMode::AllTerms => catalog
            .card_names()
            .iter()
            .filter(|name| matches_terms(name, &terms))
            .cloned()
            .collect(),
        SearchMode::Substring => {
            let mut seen = HashSet::new();
            catalog
                .lounges()
                .iter()
                .map(|lounge| lounge.card.as_str())
                .filter(|name| !name.trim().is_empty())
                .filter(|name| matches_terms(name, &terms))
                .filter(|name| seen.insert(name.to_lowercase()))
                .map(str::to_string)
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
