mod lounge_search;

pub use lounge_search::LoungeSearchScreen;
