use eframe::egui::{Context, Window, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppearanceSettings, HapticsSettings, Settings},
};

#[derive(Debug, Clone)]
pub(crate) struct SettingsViewModel<'a> {
    settings: &'a Settings,
    version: String,
    roll_count: u64,
}

impl<'a> SettingsViewModel<'a> {
    #[must_use]
    pub(crate) fn new(settings: &'a Settings, version: String, roll_count: u64) -> Self {
        Self {
            settings,
            version,
            roll_count,
        }
    }
}

pub(crate) fn show(ctx: &Context, vm: &SettingsViewModel, action_queue: &mut ActionRequestQueue) {
    let mut open = true;
    let mut settings = vm.settings.clone();
    let mut changed = false;

    Window::new("Settings")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let Settings {
                haptics: HapticsSettings { visual_buzz },
                appearance: AppearanceSettings { shuffle_background },
            } = &mut settings;

            ui.heading("Feedback");
            changed |= ui
                .checkbox(visual_buzz, "Flash dice borders on roll")
                .changed();

            ui.heading("Appearance");
            changed |= ui
                .checkbox(shuffle_background, "New background for each result")
                .changed();
            widgets::global_theme_preference_buttons(ui);

            ui.separator();
            ui.label(format!("Rolls this session: {}", vm.roll_count));
            ui.weak(format!("Version {}", vm.version));
        });

    if changed {
        action_queue.request(Action::UpdateSettings(settings));
    }
    if !open {
        action_queue.request(Action::CloseSettings);
    }
}
