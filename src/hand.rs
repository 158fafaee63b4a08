use crate::card::Card;
use crate::rules::{RoundRules, Scoring, Showdown};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sum of point values over `cards` under the given scoring mode.
///
/// `SkipFirstCard` leaves the first card out of the sum; an empty slice
/// totals zero either way.
pub fn total_points(cards: &[Card], scoring: Scoring) -> u32 {
    let counted = match scoring {
        Scoring::CountAll => cards,
        Scoring::SkipFirstCard => cards.get(1..).unwrap_or(&[]),
    };
    counted.iter().map(|c| u32::from(c.points())).sum()
}

/// Whether `cards` total strictly over 21 under the given scoring mode.
pub fn is_busted(cards: &[Card], scoring: Scoring) -> bool {
    total_points(cards, scoring) > 21
}

/// The cards held by one seat, in the order they were dealt.
///
/// Cards are only ever appended; a hand never puts a card back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    /// Appends a dealt card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total_points(&self, scoring: Scoring) -> u32 {
        total_points(&self.cards, scoring)
    }

    pub fn is_busted(&self, scoring: Scoring) -> bool {
        is_busted(&self.cards, scoring)
    }

    /// Whether this hand beats `other` under the given rules.
    ///
    /// This answers one direction only and never reports a draw; callers
    /// ask both ways and treat two `false` answers as a draw. A busted hand
    /// beats nothing under either showdown mode.
    pub fn beats(&self, other: &Hand, rules: &RoundRules) -> bool {
        let mine = self.total_points(rules.scoring);
        if mine > 21 {
            return false;
        }
        let theirs = other.total_points(rules.scoring);
        match rules.showdown {
            Showdown::Standard => theirs > 21 || mine > theirs,
            Showdown::PointsOnly => mine >= theirs,
        }
    }
}

/// Formats as `"<n> cards: <card>, <card>."`, e.g.
/// `"2 cards: Ace of Spades, Ten of Hearts."`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cards: ", self.cards.len())?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, ".")
    }
}
