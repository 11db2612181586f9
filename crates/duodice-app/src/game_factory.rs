use duodice_game::{DiceGame, RandomDieSource};

use crate::haptics::{LogHaptics, PulseReceiver};

/// Creates a dice game wired to the desktop haptics stand-in.
///
/// With `seed` set, rolls are reproducible.
#[must_use]
pub fn create_game(seed: Option<u64>) -> (DiceGame, PulseReceiver) {
    let source = seed.map_or_else(RandomDieSource::new, RandomDieSource::with_seed);
    let (haptics, pulses) = LogHaptics::new();
    (DiceGame::new(source, haptics), pulses)
}
