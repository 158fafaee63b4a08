use clap::Parser;
use pontoon::{
    choose_action, Action, Deck, OddsCalculator, OpeningDeal, Player, Round, RoundRules, Scoring,
    Showdown, ShuffleStyle,
};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use std::process;

#[derive(Parser)]
#[command(
    name = "round-sim",
    about = "Play one simulated round between two bots"
)]
struct Args {
    /// RNG seed for the shuffle; omit for a fresh one
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the first seat
    #[arg(long, default_value = "Harry")]
    player1: String,

    /// Name of the second seat
    #[arg(long, default_value = "Joe")]
    player2: String,

    /// Rules preset: standard, legacy
    #[arg(long, default_value = "standard")]
    rules: String,

    /// Scoring override: count_all, skip_first_card
    #[arg(long)]
    scoring: Option<String>,

    /// Opening deal override: pair_each, all_to_first
    #[arg(long)]
    opening_deal: Option<String>,

    /// Shuffle override: fisher_yates, with_replacement
    #[arg(long)]
    shuffle: Option<String>,

    /// Showdown override: standard, points_only
    #[arg(long)]
    showdown: Option<String>,

    /// Print the bust-chance table with the action it implies, then exit
    #[arg(long)]
    odds_table: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut rules = match args.rules.as_str() {
        "standard" => RoundRules::default(),
        "legacy" => RoundRules::legacy(),
        other => {
            eprintln!("Unknown rules preset '{other}'. Available: standard, legacy");
            process::exit(1);
        }
    };
    if let Some(value) = &args.scoring {
        rules.scoring = parse_scoring(value);
    }
    if let Some(value) = &args.opening_deal {
        rules.opening_deal = parse_opening_deal(value);
    }
    if let Some(value) = &args.shuffle {
        rules.shuffle = parse_shuffle(value);
    }
    if let Some(value) = &args.showdown {
        rules.showdown = parse_showdown(value);
    }

    let odds = OddsCalculator::full_catalog();

    if args.odds_table {
        println!("points  bust chance  action");
        for points in 11..=20 {
            let chance = odds.bust_probability(points);
            let action = match choose_action(points, &odds) {
                Action::Hit => "hit",
                Action::Stand => "stand",
            };
            println!("{points:>6}  {chance:>11.4}  {action}");
        }
        return;
    }

    eprintln!("Rules:");
    eprintln!("  Scoring:      {:?}", rules.scoring);
    eprintln!("  Opening deal: {:?}", rules.opening_deal);
    eprintln!("  Shuffle:      {:?}", rules.shuffle);
    eprintln!("  Showdown:     {:?}", rules.showdown);
    if let Some(seed) = args.seed {
        eprintln!("  Seed:         {seed}");
    }
    eprintln!();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut deck = Deck::standard();
    deck.shuffle(&mut rng, rules.shuffle);

    let players = [Player::new(args.player1), Player::new(args.player2)];
    match Round::new(deck, players, odds, rules).play() {
        Ok(report) => print!("{}", report.transcript()),
        Err(e) => {
            log::error!("round aborted: {e}");
            process::exit(1);
        }
    }
}

fn parse_scoring(value: &str) -> Scoring {
    match value {
        "count_all" => Scoring::CountAll,
        "skip_first_card" => Scoring::SkipFirstCard,
        _ => {
            eprintln!("Invalid scoring '{value}'. Options: count_all, skip_first_card");
            process::exit(1);
        }
    }
}

fn parse_opening_deal(value: &str) -> OpeningDeal {
    match value {
        "pair_each" => OpeningDeal::PairEach,
        "all_to_first" => OpeningDeal::AllToFirst,
        _ => {
            eprintln!("Invalid opening deal '{value}'. Options: pair_each, all_to_first");
            process::exit(1);
        }
    }
}

fn parse_shuffle(value: &str) -> ShuffleStyle {
    match value {
        "fisher_yates" => ShuffleStyle::FisherYates,
        "with_replacement" => ShuffleStyle::WithReplacement,
        _ => {
            eprintln!("Invalid shuffle '{value}'. Options: fisher_yates, with_replacement");
            process::exit(1);
        }
    }
}

fn parse_showdown(value: &str) -> Showdown {
    match value {
        "standard" => Showdown::Standard,
        "points_only" => Showdown::PointsOnly,
        _ => {
            eprintln!("Invalid showdown '{value}'. Options: standard, points_only");
            process::exit(1);
        }
    }
}
