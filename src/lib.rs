mod card;
mod deck;
mod error;
mod hand;
mod odds;
mod round;
mod rules;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::RoundError;
pub use hand::{is_busted, total_points, Hand};
pub use odds::OddsCalculator;
pub use round::{Round, RoundEvent, RoundReport, Seat, Verdict};
pub use rules::{OpeningDeal, RoundRules, Scoring, Showdown, ShuffleStyle};
pub use strategy::{choose_action, Action, Player};
