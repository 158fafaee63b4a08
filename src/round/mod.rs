use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::odds::OddsCalculator;
use crate::rules::{OpeningDeal, RoundRules};
use crate::strategy::Player;
use serde::{Deserialize, Serialize};


/// One of the two places at the table, in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::One, Seat::Two];

    fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Final outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Winner(Seat),
    Draw,
}

/// One observable step of a round, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A seat's hand right after the opening deal.
    OpeningHand { seat: Seat, hand: Hand },
    /// The seat's turn began.
    TurnStarted { seat: Seat },
    /// The seat chose to hit and was dealt `card`.
    CardDrawn { seat: Seat, card: Card },
    /// The seat ended its turn at or under 21.
    Stood { seat: Seat },
    /// The seat's total passed 21, ending its turn.
    Busted { seat: Seat },
    /// Both turns are over and the hands have been compared.
    RoundDecided { verdict: Verdict },
}

/// Everything a finished round leaves behind: who sat where, the final
/// hands, the verdict, and the full event trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub players: [Player; 2],
    pub hands: [Hand; 2],
    pub verdict: Verdict,
    pub events: Vec<RoundEvent>,
}

impl RoundReport {
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    /// Renders the event trace as the line-oriented text a table audience
    /// would read, one line per event.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            match event {
                RoundEvent::OpeningHand { seat, hand } => {
                    out.push_str(&format!(
                        "{} starts with {}\n",
                        self.player(*seat).name,
                        hand
                    ));
                }
                RoundEvent::TurnStarted { seat } => {
                    out.push_str(&format!("{}'s turn...\n", self.player(*seat).name));
                }
                RoundEvent::CardDrawn { seat, card } => {
                    out.push_str(&format!("{} hits: {}\n", self.player(*seat).name, card));
                }
                RoundEvent::Stood { seat } => {
                    out.push_str(&format!("{} stands.\n", self.player(*seat).name));
                }
                RoundEvent::Busted { seat } => {
                    out.push_str(&format!("{} busts.\n", self.player(*seat).name));
                }
                RoundEvent::RoundDecided { verdict } => match verdict {
                    Verdict::Winner(seat) => {
                        out.push_str(&format!("{} WINS!\n", self.player(*seat).name));
                    }
                    Verdict::Draw => out.push_str("It's a DRAW!\n"),
                },
            }
        }
        out
    }
}

/// Plays one round between two seats: drives the opening deal, each seat's
/// hit/stand turn in order, and the final showdown.
#[derive(Debug)]
pub struct Round<'a> {
    deck: Deck,
    players: [Player; 2],
    odds: OddsCalculator<'a>,
    rules: RoundRules,
}

impl<'a> Round<'a> {
    /// A round over an already-shuffled deck. The estimator is borrowed
    /// state; the same catalog can serve any number of rounds.
    pub fn new(
        deck: Deck,
        players: [Player; 2],
        odds: OddsCalculator<'a>,
        rules: RoundRules,
    ) -> Self {
        Round {
            deck,
            players,
            odds,
            rules,
        }
    }

    /// Runs the round to completion and returns the report.
    ///
    /// Consumes the round: hands exist only for its duration and come back
    /// inside the report. The same inputs always produce the same report;
    /// all randomness happens in the shuffle before the round starts.
    pub fn play(mut self) -> Result<RoundReport, RoundError> {
        let mut events = Vec::new();
        let mut hands = [Hand::new(), Hand::new()];

        match self.rules.opening_deal {
            OpeningDeal::PairEach => {
                for hand in hands.iter_mut() {
                    hand.add_card(self.deck.deal()?);
                    hand.add_card(self.deck.deal()?);
                }
            }
            OpeningDeal::AllToFirst => {
                for _ in 0..4 {
                    hands[0].add_card(self.deck.deal()?);
                }
            }
        }
        for seat in Seat::BOTH {
            events.push(RoundEvent::OpeningHand {
                seat,
                hand: hands[seat.index()].clone(),
            });
        }

        for seat in Seat::BOTH {
            events.push(RoundEvent::TurnStarted { seat });
            loop {
                let total = hands[seat.index()].total_points(self.rules.scoring);
                if !self.players[seat.index()].wants_to_hit(total, &self.odds) {
                    break;
                }
                let card = self.deck.deal()?;
                log::debug!(
                    "{} hits at {total} and draws {card}",
                    self.players[seat.index()].name
                );
                events.push(RoundEvent::CardDrawn { seat, card });
                hands[seat.index()].add_card(card);
            }
            if hands[seat.index()].is_busted(self.rules.scoring) {
                events.push(RoundEvent::Busted { seat });
            } else {
                events.push(RoundEvent::Stood { seat });
            }
        }

        // `beats` answers one direction; two refusals mean a draw.
        let verdict = if hands[0].beats(&hands[1], &self.rules) {
            Verdict::Winner(Seat::One)
        } else if hands[1].beats(&hands[0], &self.rules) {
            Verdict::Winner(Seat::Two)
        } else {
            Verdict::Draw
        };
        events.push(RoundEvent::RoundDecided { verdict });
        log::debug!("round decided: {verdict:?}");

        Ok(RoundReport {
            players: self.players,
            hands,
            verdict,
            events,
        })
    }
}
