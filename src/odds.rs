use crate::card::Card;

/// Bust-chance estimator over a fixed reference catalog.
///
/// The catalog is the full set of cards considered possible as the next
/// draw. It is deliberately never updated as cards leave the deck, so the
/// estimate depends on the current total alone and two queries at the same
/// total always agree.
#[derive(Debug, Clone, Copy)]
pub struct OddsCalculator<'a> {
    catalog: &'a [Card],
}

impl<'a> OddsCalculator<'a> {
    pub fn new(catalog: &'a [Card]) -> Self {
        OddsCalculator { catalog }
    }

    /// Estimator over the full 52-card catalog.
    pub fn full_catalog() -> OddsCalculator<'static> {
        OddsCalculator {
            catalog: &Card::ALL,
        }
    }

    pub fn catalog(&self) -> &'a [Card] {
        self.catalog
    }

    /// Chance that one more card pushes `current_points` past 21.
    ///
    /// Splits the catalog into cards that would bust and cards that would
    /// not, then returns busts over non-busts. The ratio is against the
    /// non-busting cards rather than the whole catalog, so it exceeds 1.0
    /// once safe draws get scarce (44 / 8 = 5.5 at 19 points). An empty
    /// catalog yields a neutral 0.5; a catalog with no safe card at all
    /// yields 1.0 rather than dividing by zero.
    pub fn bust_probability(&self, current_points: u32) -> f64 {
        if self.catalog.is_empty() {
            return 0.5;
        }
        let mut busts = 0u32;
        let mut non_busts = 0u32;
        for card in self.catalog {
            if current_points + u32::from(card.points()) > 21 {
                busts += 1;
            } else {
                non_busts += 1;
            }
        }
        if non_busts == 0 {
            return 1.0;
        }
        f64::from(busts) / f64::from(non_busts)
    }
}
