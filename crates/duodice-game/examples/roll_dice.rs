//! Example rolling the dice from the command line.
//!
//! This example shows how to:
//! - Create a `DiceGame` with a seeded `RandomDieSource`
//! - Roll repeatedly and print each result
//! - Summarize how often each total came up
//!
//! # Usage
//!
//! ```sh
//! cargo run --example roll_dice
//! ```
//!
//! Roll a fixed number of times with a reproducible seed:
//!
//! ```sh
//! cargo run --example roll_dice -- --seed 42 --count 20
//! ```
//!
//! Only print the histogram:
//!
//! ```sh
//! cargo run --example roll_dice -- --count 10000 --quiet
//! ```

use clap::Parser;
use duodice_game::{DiceGame, NoHaptics, RandomDieSource};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the die source. A random seed is used if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of rolls.
    #[arg(short, long, value_name = "COUNT", default_value_t = 10)]
    count: usize,

    /// Skip per-roll output.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = args
        .seed
        .map_or_else(RandomDieSource::new, RandomDieSource::with_seed);
    let seed = source.seed();
    let mut game = DiceGame::new(source, NoHaptics);

    // index = total (2..=12)
    let mut totals = [0usize; 13];
    let mut doubles = 0usize;
    for i in 1..=args.count {
        let Some(pair) = game.roll().dice() else {
            unreachable!("dice are always present after a roll");
        };
        totals[usize::from(pair.total())] += 1;
        if pair.is_double() {
            doubles += 1;
        }
        if !args.quiet {
            println!("#{i:>4}: {} {}", pair.high(), pair.low());
        }
    }

    println!();
    println!("Seed: {seed}");
    println!("Rolls: {}", args.count);
    println!("Doubles: {doubles}");
    for (total, &count) in totals.iter().enumerate().skip(2) {
        let bar = "#".repeat(count * 40 / args.count.max(1));
        println!("{total:>2}: {count:>6} {bar}");
    }
}
