use duodice_game::DiceGame;

use crate::state::Settings;

// AppState holds the dice game store and settings. Nothing is persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: DiceGame,
    pub(crate) settings: Settings,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(game: DiceGame) -> Self {
        Self {
            game,
            settings: Settings::default(),
        }
    }
}
