use eframe::egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::theme::ScreenPalette,
};

const BUTTON_MIN_SIZE: Vec2 = Vec2::new(170.0, 72.0);
const LABEL_SIZE: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ControlsViewModel {
    /// The show/hide button only appears once there is something to show.
    show_toggle: bool,
    dice_visible: bool,
}

impl ControlsViewModel {
    #[must_use]
    pub(crate) fn new(show_toggle: bool, dice_visible: bool) -> Self {
        Self {
            show_toggle,
            dice_visible,
        }
    }

    #[must_use]
    pub(crate) fn show_toggle(&self) -> bool {
        self.show_toggle
    }

    #[must_use]
    pub(crate) fn toggle_label(&self) -> &'static str {
        if self.dice_visible {
            "Hide dice"
        } else {
            "Show dice"
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &ControlsViewModel,
    palette: &ScreenPalette,
    action_queue: &mut ActionRequestQueue,
) {
    let roll = Button::new(
        RichText::new("Roll dice")
            .size(LABEL_SIZE)
            .color(palette.gradient_top),
    )
    .fill(palette.content)
    .min_size(BUTTON_MIN_SIZE);
    if ui.add(roll).clicked() {
        action_queue.request(Action::RollDice);
    }

    let toggle = Button::new(
        RichText::new(vm.toggle_label())
            .size(LABEL_SIZE)
            .color(palette.content),
    )
    .fill(Color32::TRANSPARENT)
    .stroke(Stroke::new(1.0, palette.content))
    .min_size(BUTTON_MIN_SIZE);
    if ui.add_visible(vm.show_toggle(), toggle).clicked() {
        action_queue.request(Action::ToggleVisibility);
    }
}

#[cfg(test)]
mod tests {
    use super::ControlsViewModel;

    #[test]
    fn toggle_label_follows_visibility() {
        assert_eq!(ControlsViewModel::new(true, true).toggle_label(), "Hide dice");
        assert_eq!(ControlsViewModel::new(true, false).toggle_label(), "Show dice");
    }
}
