use arcade_core::{spin_once, EngineParams, GameRng};

fn main() {
    // Example end-to-end spin with a fixed seed
    let mut rng = GameRng::seeded(1);
    let params = EngineParams::default_3x3();
    let outcome = spin_once(&mut rng, &params, 10, 3);
    println!("{}", outcome.grid);
    println!(
        "winnings={} lines={:?}",
        outcome.winnings, outcome.winning_lines
    );
}
