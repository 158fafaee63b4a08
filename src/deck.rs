use crate::card::Card;
use crate::error::RoundError;
use crate::rules::ShuffleStyle;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The cards remaining to be dealt, front of the vector first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A fresh deck holding the full 52-card catalog in catalog order.
    pub fn standard() -> Self {
        Deck {
            cards: Card::ALL.to_vec(),
        }
    }

    /// A deck over a caller-supplied sequence, dealt front to back.
    pub fn new(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    /// Randomizes the deal order with the given strategy.
    ///
    /// `WithReplacement` rebuilds the sequence by sampling positions of the
    /// current order independently, so the result is generally not a
    /// permutation. Neither style changes the deck length.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R, style: ShuffleStyle) {
        match style {
            ShuffleStyle::FisherYates => self.cards.shuffle(rng),
            ShuffleStyle::WithReplacement => {
                let n = self.cards.len();
                let resampled: Vec<Card> =
                    (0..n).map(|_| self.cards[rng.gen_range(0..n)]).collect();
                self.cards = resampled;
            }
        }
        log::debug!("shuffled deck of {} cards ({:?})", self.cards.len(), style);
    }

    /// Removes and returns the next card in deal order.
    pub fn deal(&mut self) -> Result<Card, RoundError> {
        if self.cards.is_empty() {
            return Err(RoundError::EmptyDeck);
        }
        Ok(self.cards.remove(0))
    }

    /// Remaining cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::standard()
    }
}
