use serde::{Deserialize, Serialize};

/// How a hand's running total is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scoring {
    /// Every card in the hand counts.
    CountAll,
    /// The first card dealt to the hand is left out of the total (legacy
    /// behavior).
    SkipFirstCard,
}

/// How the four opening cards are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpeningDeal {
    /// Two cards to each seat, first seat served first.
    PairEach,
    /// All four opening cards land in the first seat's hand and the second
    /// seat starts empty (legacy behavior).
    AllToFirst,
}

/// Deck randomization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleStyle {
    /// Uniform random permutation of the deck.
    FisherYates,
    /// Each output position is drawn independently from the pre-shuffle
    /// sequence, so a card can appear twice or not at all (legacy
    /// behavior). Deck length is preserved.
    WithReplacement,
}

/// How two finished hands are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showdown {
    /// A hand at or under 21 wins if the other hand busted or scored
    /// strictly lower. Equal totals are a draw.
    Standard,
    /// Raw point comparison: a hand at or under 21 wins whenever its total
    /// is at least the other's, even against a busted hand whose raw total
    /// is higher (legacy behavior). Two busted hands are a draw.
    PointsOnly,
}

/// Rule flags for a single round.
///
/// `default()` plays the corrected game; [`RoundRules::legacy`] reproduces
/// the original simulator bug for bug so old transcripts can be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRules {
    pub scoring: Scoring,
    pub opening_deal: OpeningDeal,
    pub shuffle: ShuffleStyle,
    pub showdown: Showdown,
}

impl Default for RoundRules {
    fn default() -> Self {
        RoundRules {
            scoring: Scoring::CountAll,
            opening_deal: OpeningDeal::PairEach,
            shuffle: ShuffleStyle::FisherYates,
            showdown: Showdown::Standard,
        }
    }
}

impl RoundRules {
    /// The original simulator's behavior: first-card-blind scoring, the
    /// four-card misdeal, sampling-with-replacement shuffling, and the
    /// bust-blind showdown.
    pub fn legacy() -> Self {
        RoundRules {
            scoring: Scoring::SkipFirstCard,
            opening_deal: OpeningDeal::AllToFirst,
            shuffle: ShuffleStyle::WithReplacement,
            showdown: Showdown::PointsOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_corrected() {
        let rules = RoundRules::default();
        assert_eq!(rules.scoring, Scoring::CountAll);
        assert_eq!(rules.opening_deal, OpeningDeal::PairEach);
        assert_eq!(rules.shuffle, ShuffleStyle::FisherYates);
        assert_eq!(rules.showdown, Showdown::Standard);
    }

    #[test]
    fn test_legacy_rules_flip_every_flag() {
        let rules = RoundRules::legacy();
        assert_eq!(rules.scoring, Scoring::SkipFirstCard);
        assert_eq!(rules.opening_deal, OpeningDeal::AllToFirst);
        assert_eq!(rules.shuffle, ShuffleStyle::WithReplacement);
        assert_eq!(rules.showdown, Showdown::PointsOnly);
    }

    #[test]
    fn test_single_flag_override() {
        let rules = RoundRules {
            showdown: Showdown::PointsOnly,
            ..Default::default()
        };
        assert_eq!(rules.scoring, Scoring::CountAll);
        assert_eq!(rules.showdown, Showdown::PointsOnly);
    }
}
