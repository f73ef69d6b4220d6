mod lounge_card;

pub use lounge_card::LoungeCard;
