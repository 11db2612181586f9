use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::RollDice => {
            let before = app_state.game.state().dice();
            let after = app_state.game.roll().dice();
            // A repeated result keeps the current background.
            if after != before && app_state.settings.appearance.shuffle_background {
                ui_state.background.shuffle();
            }
        }
        Action::ToggleVisibility => {
            app_state.game.toggle_visibility();
        }
        Action::OpenSettings => ui_state.settings_open = true,
        Action::CloseSettings => ui_state.settings_open = false,
        Action::UpdateSettings(settings) => {
            log::debug!("settings updated: {settings:?}");
            app_state.settings = settings;
        }
    }
}

#[cfg(test)]
mod tests {
    use duodice_core::DieFace;
    use duodice_game::{DiceGame, HapticPulse, ScriptedDieSource};

    use super::{handle, handle_all};
    use crate::{
        action::{Action, ActionRequestQueue},
        haptics::LogHaptics,
        state::{AppState, Settings, UiState},
    };

    fn scripted_states(faces: &[DieFace]) -> (AppState, UiState) {
        let source = ScriptedDieSource::new(faces.iter().copied()).unwrap();
        let (haptics, pulses) = LogHaptics::new();
        let app_state = AppState::new(DiceGame::new(source, haptics));
        (app_state, UiState::new(pulses))
    }

    #[test]
    fn roll_reveals_dice_and_emits_pulse() {
        let (mut app_state, mut ui_state) = scripted_states(&[DieFace::D3, DieFace::D5]);

        handle(&mut app_state, &mut ui_state, Action::RollDice);

        let state = app_state.game.state();
        assert_eq!(state.die1(), Some(DieFace::D5));
        assert_eq!(state.die2(), Some(DieFace::D3));
        assert!(state.is_visible());
        assert_eq!(ui_state.pulses.take(), Some(HapticPulse::ROLL));
    }

    #[test]
    fn roll_with_new_values_changes_background() {
        let (mut app_state, mut ui_state) =
            scripted_states(&[DieFace::D3, DieFace::D5, DieFace::D1, DieFace::D1]);

        let initial = ui_state.background;
        handle(&mut app_state, &mut ui_state, Action::RollDice);
        let after_first = ui_state.background;
        assert_ne!(after_first, initial);

        handle(&mut app_state, &mut ui_state, Action::RollDice);
        assert_ne!(ui_state.background, after_first);
    }

    #[test]
    fn roll_with_same_values_keeps_background() {
        let (mut app_state, mut ui_state) = scripted_states(&[DieFace::D4, DieFace::D2]);

        handle(&mut app_state, &mut ui_state, Action::RollDice);
        let background = ui_state.background;
        handle(&mut app_state, &mut ui_state, Action::RollDice);
        assert_eq!(ui_state.background, background);
    }

    #[test]
    fn disabled_shuffle_keeps_background() {
        let (mut app_state, mut ui_state) = scripted_states(&[DieFace::D3, DieFace::D5]);
        let mut settings = Settings::default();
        settings.appearance.shuffle_background = false;

        handle(&mut app_state, &mut ui_state, Action::UpdateSettings(settings.clone()));
        handle(&mut app_state, &mut ui_state, Action::RollDice);

        assert_eq!(app_state.settings, settings);
        assert_eq!(ui_state.background.index, 0);
    }

    #[test]
    fn toggle_keeps_background_and_flips_visibility() {
        let (mut app_state, mut ui_state) = scripted_states(&[DieFace::D5, DieFace::D3]);
        handle(&mut app_state, &mut ui_state, Action::RollDice);
        let _ = ui_state.pulses.take();
        let background = ui_state.background;

        handle(&mut app_state, &mut ui_state, Action::ToggleVisibility);

        let state = app_state.game.state();
        assert!(!state.is_visible());
        assert_eq!(state.die1(), Some(DieFace::D5));
        assert_eq!(ui_state.background, background);
        assert_eq!(ui_state.pulses.take(), None);
    }

    #[test]
    fn handle_all_applies_in_order() {
        let (mut app_state, mut ui_state) = scripted_states(&[DieFace::D2, DieFace::D6]);
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::ToggleVisibility);
        queue.request(Action::RollDice);
        queue.request(Action::OpenSettings);

        handle_all(&mut app_state, &mut ui_state, &mut queue);

        // Roll comes after the toggle, so the dice end up visible.
        assert!(app_state.game.state().is_visible());
        assert_eq!(app_state.game.roll_count(), 1);
        assert!(ui_state.settings_open);
        assert!(queue.take_all().is_empty());

        handle(&mut app_state, &mut ui_state, Action::CloseSettings);
        assert!(!ui_state.settings_open);
    }
}
