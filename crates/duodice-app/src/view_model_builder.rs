use crate::{
    state::{AppState, UiState},
    ui::{
        background::BackgroundViewModel, controls::ControlsViewModel, die::DieViewModel,
        game_screen::GameScreenViewModel, settings::SettingsViewModel, theme::ScreenPalette,
    },
    version,
};

/// Builds the main screen from state; `buzz` is the current border pulse strength.
#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
    buzz: f32,
) -> GameScreenViewModel {
    let palette = ScreenPalette::from_gradient_index(ui_state.background.index);
    let state = app_state.game.state();
    let revealed = state.revealed();
    let buzz = if app_state.settings.haptics.visual_buzz {
        buzz
    } else {
        0.0
    };

    let dice_vms = [
        DieViewModel::new(revealed.map(|pair| pair.high()), palette.content, buzz),
        DieViewModel::new(revealed.map(|pair| pair.low()), palette.content, buzz),
    ];
    let controls_vm = ControlsViewModel::new(state.has_rolled(), state.is_visible());

    GameScreenViewModel::new(BackgroundViewModel::new(palette), dice_vms, controls_vm)
}

#[must_use]
pub(crate) fn build_settings_view_model(app_state: &AppState) -> SettingsViewModel<'_> {
    SettingsViewModel::new(
        &app_state.settings,
        version::build_version(),
        app_state.game.roll_count(),
    )
}

#[cfg(test)]
mod tests {
    use duodice_core::DieFace;
    use duodice_game::{DiceGame, ScriptedDieSource};

    use super::build_game_screen_view_model;
    use crate::{
        haptics::LogHaptics,
        state::{AppState, UiState},
    };

    fn scripted_states(faces: &[DieFace]) -> (AppState, UiState) {
        let source = ScriptedDieSource::new(faces.iter().copied()).unwrap();
        let (haptics, pulses) = LogHaptics::new();
        (
            AppState::new(DiceGame::new(source, haptics)),
            UiState::new(pulses),
        )
    }

    #[test]
    fn initial_screen_masks_dice_and_hides_toggle() {
        let (app_state, ui_state) = scripted_states(&[DieFace::D1]);

        let vm = build_game_screen_view_model(&app_state, &ui_state, 0.0);

        assert_eq!(vm.dice_vms.map(|die| die.face()), [None, None]);
        assert!(!vm.controls_vm.show_toggle());
    }

    #[test]
    fn rolled_screen_shows_larger_die_first() {
        let (mut app_state, ui_state) = scripted_states(&[DieFace::D3, DieFace::D5]);
        app_state.game.roll();

        let vm = build_game_screen_view_model(&app_state, &ui_state, 0.0);

        assert_eq!(
            vm.dice_vms.map(|die| die.face()),
            [Some(DieFace::D5), Some(DieFace::D3)]
        );
        assert!(vm.controls_vm.show_toggle());
        assert_eq!(vm.controls_vm.toggle_label(), "Hide dice");
    }

    #[test]
    fn hidden_dice_render_as_masked() {
        let (mut app_state, ui_state) = scripted_states(&[DieFace::D3, DieFace::D5]);
        app_state.game.roll();
        app_state.game.toggle_visibility();

        let vm = build_game_screen_view_model(&app_state, &ui_state, 0.0);

        assert_eq!(vm.dice_vms.map(|die| die.face()), [None, None]);
        assert!(vm.controls_vm.show_toggle());
        assert_eq!(vm.controls_vm.toggle_label(), "Show dice");
    }

    #[test]
    fn toggle_before_roll_still_masks_dice() {
        let (mut app_state, ui_state) = scripted_states(&[DieFace::D2]);
        app_state.game.toggle_visibility();

        let vm = build_game_screen_view_model(&app_state, &ui_state, 0.0);

        assert_eq!(vm.dice_vms.map(|die| die.face()), [None, None]);
        assert!(!vm.controls_vm.show_toggle());
    }
}
