//! Duodice application shell.
//!
//! # Design Notes
//! - One screen: two dice, a roll button and a show/hide button.
//! - UI code only requests actions; state changes happen in `action_handler`.
//! - Nothing is persisted; closing the app discards the dice.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::ActionRequestQueue,
    action_handler, game_factory,
    state::{AppState, UiState},
    ui, version, view_model_builder,
};

#[derive(Debug)]
pub struct DuodiceApp {
    app_state: AppState,
    ui_state: UiState,
}

impl DuodiceApp {
    /// Creates the app. With `seed` set, rolls are reproducible.
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>, seed: Option<u64>) -> Self {
        log::info!("starting Duodice {}", version::build_version());
        let (game, pulses) = game_factory::create_game(seed);
        Self {
            app_state: AppState::new(game),
            ui_state: UiState::new(pulses),
        }
    }

    fn apply_haptic_pulse(&mut self, now: f64) {
        if let Some(pulse) = self.ui_state.pulses.take()
            && self.app_state.settings.haptics.visual_buzz
        {
            self.ui_state.start_buzz(pulse, now);
        }
    }
}

impl App for DuodiceApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| {
            ui::input::handle_input(i, self.ui_state.settings_open, &mut action_queue);
        });
        action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let now = ctx.input(|i| i.time);
        self.apply_haptic_pulse(now);
        let buzz = self.ui_state.buzz_intensity(now);
        if buzz > 0.0 {
            ctx.request_repaint();
        }

        let game_screen_vm =
            view_model_builder::build_game_screen_view_model(&self.app_state, &self.ui_state, buzz);

        CentralPanel::default()
            .frame(eframe::egui::Frame::NONE)
            .show(ctx, |ui| {
                ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
            });

        if self.ui_state.settings_open {
            let settings_vm = view_model_builder::build_settings_view_model(&self.app_state);
            ui::settings::show(ctx, &settings_vm, &mut action_queue);
        }

        // Clicks are handled after drawing, so show their effect on the next frame.
        if !action_queue.is_empty() {
            action_handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
            self.apply_haptic_pulse(now);
            ctx.request_repaint();
        }
    }
}
