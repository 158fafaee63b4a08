use crate::odds::OddsCalculator;
use serde::{Deserialize, Serialize};

/// A seat's choice on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
}

/// Hit/stand policy shared by every player.
///
/// Stand at 21 or more. Hit at 10 or less, where no single card can bust.
/// In between, hit while the estimated bust chance stays under 0.5; with
/// the estimator's busts-over-non-busts ratio that threshold is crossed at
/// 13 points against the full catalog.
pub fn choose_action(current_points: u32, odds: &OddsCalculator) -> Action {
    if current_points >= 21 {
        Action::Stand
    } else if current_points <= 10 {
        Action::Hit
    } else if odds.bust_probability(current_points) < 0.5 {
        Action::Hit
    } else {
        Action::Stand
    }
}

/// A named seat at the table. Players carry no state between decisions;
/// the estimator is handed in with every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { name: name.into() }
    }

    /// Whether this player takes another card at `current_points`.
    pub fn wants_to_hit(&self, current_points: u32, odds: &OddsCalculator) -> bool {
        choose_action(current_points, odds) == Action::Hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};

    #[test]
    fn test_stands_at_twenty_one_and_above() {
        let odds = OddsCalculator::full_catalog();
        assert_eq!(choose_action(21, &odds), Action::Stand);
        assert_eq!(choose_action(22, &odds), Action::Stand);
        assert_eq!(choose_action(30, &odds), Action::Stand);
    }

    #[test]
    fn test_hits_at_ten_and_below_without_consulting_odds() {
        // The neutral empty-catalog estimate would stand, so a hit here
        // shows the low band decides before the estimator is asked.
        let odds = OddsCalculator::new(&[]);
        assert_eq!(choose_action(0, &odds), Action::Hit);
        assert_eq!(choose_action(5, &odds), Action::Hit);
        assert_eq!(choose_action(10, &odds), Action::Hit);
    }

    #[test]
    fn test_middle_band_follows_the_estimate() {
        let odds = OddsCalculator::full_catalog();
        // 16/36 at 12 is under the threshold; 20/32 at 13 is over.
        assert_eq!(choose_action(12, &odds), Action::Hit);
        assert_eq!(choose_action(13, &odds), Action::Stand);
        assert_eq!(choose_action(19, &odds), Action::Stand);
    }

    #[test]
    fn test_middle_band_with_a_friendly_catalog() {
        // All twos: nothing busts at 15, so the policy keeps hitting.
        let twos: Vec<Card> = Suit::ALL
            .into_iter()
            .map(|suit| Card::new(Rank::Two, suit))
            .collect();
        let odds = OddsCalculator::new(&twos);

        assert_eq!(choose_action(15, &odds), Action::Hit);
        assert_eq!(choose_action(19, &odds), Action::Hit);
        assert_eq!(choose_action(20, &odds), Action::Stand);
    }

    #[test]
    fn test_empty_catalog_stands_in_the_middle_band() {
        // The neutral 0.5 estimate is not strictly under the threshold.
        let odds = OddsCalculator::new(&[]);
        assert_eq!(choose_action(15, &odds), Action::Stand);
    }

    #[test]
    fn test_player_delegates_to_the_policy() {
        let odds = OddsCalculator::full_catalog();
        let player = Player::new("Harry");

        assert_eq!(player.name, "Harry");
        assert!(player.wants_to_hit(8, &odds));
        assert!(player.wants_to_hit(12, &odds));
        assert!(!player.wants_to_hit(13, &odds));
        assert!(!player.wants_to_hit(21, &odds));
    }
}
