use crate::{DiceGameState, DieSource, HapticPulse, Haptics};

/// Per-screen store for the dice game.
///
/// Owns the current [`DiceGameState`] together with the face source and the
/// haptics sink used by [`DiceGame::roll`]. Dropping it discards the state.
#[derive(Debug)]
pub struct DiceGame {
    state: DiceGameState,
    source: Box<dyn DieSource>,
    haptics: Box<dyn Haptics>,
    roll_count: u64,
}

impl DiceGame {
    /// Creates a store in the initial state.
    #[must_use]
    pub fn new<S, H>(source: S, haptics: H) -> Self
    where
        S: DieSource + 'static,
        H: Haptics + 'static,
    {
        Self {
            state: DiceGameState::new(),
            source: Box::new(source),
            haptics: Box::new(haptics),
            roll_count: 0,
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> DiceGameState {
        self.state
    }

    /// Number of rolls since the store was created.
    #[must_use]
    pub fn roll_count(&self) -> u64 {
        self.roll_count
    }

    /// Rolls both dice, reveals them and emits [`HapticPulse::ROLL`].
    pub fn roll(&mut self) -> DiceGameState {
        let first = self.source.draw();
        let second = self.source.draw();

        self.haptics.pulse(HapticPulse::ROLL);

        self.state = self.state.rolled(first, second);
        self.roll_count += 1;
        log::debug!(
            "roll #{}: drew ({first}, {second})",
            self.roll_count
        );
        self.state
    }

    /// Flips whether the dice are shown.
    pub fn toggle_visibility(&mut self) -> DiceGameState {
        self.state = self.state.toggled_visibility();
        log::debug!("dice visible: {}", self.state.is_visible());
        self.state
    }
}

#[cfg(test)]
mod tests {
    use duodice_core::{DicePair, DieFace};
    use proptest::prelude::*;

    use super::*;
    use crate::{NoHaptics, RandomDieSource, RecordingHaptics, ScriptedDieSource};

    fn scripted_game(faces: &[DieFace]) -> (DiceGame, RecordingHaptics) {
        let haptics = RecordingHaptics::new();
        let source = ScriptedDieSource::new(faces.iter().copied()).unwrap();
        (DiceGame::new(source, haptics.clone()), haptics)
    }

    #[test]
    fn test_new_game_starts_empty_and_hidden() {
        let (game, haptics) = scripted_game(&[DieFace::D1]);
        let state = game.state();
        assert_eq!((state.die1(), state.die2()), (None, None));
        assert!(!state.is_visible());
        assert_eq!(game.roll_count(), 0);
        assert!(haptics.pulses().is_empty());
    }

    #[test]
    fn test_roll_with_draws_three_five() {
        let (mut game, _haptics) = scripted_game(&[DieFace::D3, DieFace::D5]);
        let state = game.roll();
        assert_eq!(state.die1(), Some(DieFace::D5));
        assert_eq!(state.die2(), Some(DieFace::D3));
        assert!(state.is_visible());
        assert_eq!(game.state(), state);
    }

    #[test]
    fn test_toggle_after_roll_masks_values() {
        let (mut game, _haptics) = scripted_game(&[DieFace::D5, DieFace::D3]);
        game.roll();
        let state = game.toggle_visibility();
        assert_eq!(
            state,
            DiceGameState::from_parts(Some(DicePair::ordered(DieFace::D5, DieFace::D3)), false)
        );
    }

    #[test]
    fn test_each_roll_emits_one_pulse() {
        let (mut game, haptics) = scripted_game(&[DieFace::D2, DieFace::D4]);
        game.roll();
        game.toggle_visibility();
        game.toggle_visibility();
        game.roll();
        assert_eq!(haptics.pulses(), [HapticPulse::ROLL, HapticPulse::ROLL]);
        assert_eq!(game.roll_count(), 2);
    }

    #[test]
    fn test_toggle_before_roll_keeps_dice_absent() {
        let (mut game, haptics) = scripted_game(&[DieFace::D6]);
        let state = game.toggle_visibility();
        assert!(state.is_visible());
        assert!(!state.has_rolled());
        assert!(haptics.pulses().is_empty());
    }

    proptest! {
        #[test]
        fn random_rolls_stay_in_range_and_ordered(seed in any::<u64>(), rolls in 1usize..50) {
            let mut game = DiceGame::new(RandomDieSource::with_seed(seed), NoHaptics);
            for _ in 0..rolls {
                let state = game.roll();
                let die1 = state.die1().unwrap();
                let die2 = state.die2().unwrap();
                prop_assert!((1..=6).contains(&die1.value()));
                prop_assert!((1..=6).contains(&die2.value()));
                prop_assert!(die1 >= die2);
                prop_assert!(state.is_visible());
            }
        }

        #[test]
        fn toggle_twice_restores_visibility(seed in any::<u64>(), roll_first in any::<bool>()) {
            let mut game = DiceGame::new(RandomDieSource::with_seed(seed), NoHaptics);
            if roll_first {
                game.roll();
            }
            let before = game.state();
            game.toggle_visibility();
            let after = game.toggle_visibility();
            prop_assert_eq!(after, before);
        }
    }
}
