use pontoon::{
    Card, Deck, OddsCalculator, Player, Round, RoundEvent, RoundReport, RoundRules, Scoring, Seat,
    Verdict,
};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use std::collections::HashSet;

fn players() -> [Player; 2] {
    [Player::new("Harry"), Player::new("Joe")]
}

fn seeded_round(seed: u64, rules: RoundRules) -> RoundReport {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng, rules.shuffle);
    Round::new(deck, players(), OddsCalculator::full_catalog(), rules)
        .play()
        .expect("a 52-card deck cannot run dry in one round")
}

#[test]
fn test_same_seed_replays_the_same_standard_round() {
    for seed in [0, 1, 7, 42, 1337] {
        let first = seeded_round(seed, RoundRules::default());
        let second = seeded_round(seed, RoundRules::default());
        assert_eq!(first, second, "seed {seed}");
        assert_eq!(first.transcript(), second.transcript(), "seed {seed}");
    }
}

#[test]
fn test_same_seed_replays_the_same_legacy_round() {
    for seed in [0, 1, 7, 42, 1337] {
        let first = seeded_round(seed, RoundRules::legacy());
        let second = seeded_round(seed, RoundRules::legacy());
        assert_eq!(first, second, "seed {seed}");
    }
}

#[test]
fn test_transcript_has_one_line_per_event() {
    let report = seeded_round(42, RoundRules::default());
    assert_eq!(report.transcript().lines().count(), report.events.len());
}

#[test]
fn test_standard_rounds_never_deal_the_same_card_twice() {
    // Fisher-Yates leaves a permutation, so the two hands never overlap.
    for seed in [0, 1, 7, 42, 1337] {
        let report = seeded_round(seed, RoundRules::default());
        let dealt: Vec<Card> = report
            .hands
            .iter()
            .flat_map(|hand| hand.cards().iter().copied())
            .collect();
        let distinct: HashSet<Card> = dealt.iter().copied().collect();
        assert_eq!(distinct.len(), dealt.len(), "seed {seed}");
    }
}

#[test]
fn test_standard_winner_is_never_busted() {
    for seed in 0..50 {
        let report = seeded_round(seed, RoundRules::default());
        if let Verdict::Winner(seat) = report.verdict {
            assert!(
                !report.hand(seat).is_busted(Scoring::CountAll),
                "seed {seed}"
            );
        }
    }
}

#[test]
fn test_every_round_opens_with_four_cards_dealt() {
    for rules in [RoundRules::default(), RoundRules::legacy()] {
        let report = seeded_round(9, rules);
        let opening = match (&report.events[0], &report.events[1]) {
            (
                RoundEvent::OpeningHand { hand: first, .. },
                RoundEvent::OpeningHand { hand: second, .. },
            ) => first.len() + second.len(),
            _ => panic!("rounds must open with both hands announced"),
        };
        assert_eq!(opening, 4);
    }
}

#[test]
fn test_report_survives_json() {
    let report = seeded_round(7, RoundRules::legacy());
    let json = serde_json::to_string(&report).expect("report serializes");
    let back: RoundReport = serde_json::from_str(&json).expect("report deserializes");
    assert_eq!(report, back);
}

#[test]
fn test_seat_one_goes_first() {
    let report = seeded_round(3, RoundRules::default());
    let turns: Vec<Seat> = report
        .events
        .iter()
        .filter_map(|event| match event {
            RoundEvent::TurnStarted { seat } => Some(*seat),
            _ => None,
        })
        .collect();
    assert_eq!(turns, vec![Seat::One, Seat::Two]);
}
