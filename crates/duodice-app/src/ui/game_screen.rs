use eframe::egui::{self, Id, RichText, Ui};
use egui_extras::{Size, StripBuilder};

use super::{background, controls, die};
use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        background::BackgroundViewModel, controls::ControlsViewModel, die::DieViewModel,
        theme::ScreenPalette,
    },
};

const TITLE: &str = "Duodice";
const TITLE_BAR_HEIGHT: f32 = 56.0;
const TITLE_SIZE: f32 = 32.0;
const DICE_SPACING: f32 = 8.0;
const SECTION_SPACING: f32 = 16.0;
const BUTTON_HEIGHT: f32 = 72.0;
const BUTTON_ROW_WIDTH: f32 = 170.0 * 2.0 + DICE_SPACING;

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) background_vm: BackgroundViewModel,
    pub(crate) dice_vms: [DieViewModel; 2],
    pub(crate) controls_vm: ControlsViewModel,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        background_vm: BackgroundViewModel,
        dice_vms: [DieViewModel; 2],
        controls_vm: ControlsViewModel,
    ) -> Self {
        Self {
            background_vm,
            dice_vms,
            controls_vm,
        }
    }

    fn palette(&self) -> &ScreenPalette {
        &self.background_vm.palette
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    background::paint(ui.painter(), ui.max_rect(), &vm.background_vm);
    let palette = *vm.palette();

    StripBuilder::new(ui)
        .size(Size::exact(TITLE_BAR_HEIGHT))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| show_title_bar(ui, &palette, action_queue));
            strip.cell(|ui| {
                let dice_row_height = die::DIE_SIZE;
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(dice_row_height))
                    .size(Size::exact(SECTION_SPACING))
                    .size(Size::exact(BUTTON_HEIGHT))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| show_dice_row(ui, vm));
                        strip.empty();
                        strip.cell(|ui| {
                            centered_row(ui, BUTTON_ROW_WIDTH, |ui| {
                                controls::show(ui, &vm.controls_vm, &palette, action_queue);
                            });
                        });
                        strip.empty();
                    });
            });
        });
}

fn show_title_bar(ui: &mut Ui, palette: &ScreenPalette, action_queue: &mut ActionRequestQueue) {
    ui.horizontal_centered(|ui| {
        ui.add_space(SECTION_SPACING);
        ui.label(RichText::new(TITLE).size(TITLE_SIZE).color(palette.title));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(SECTION_SPACING);
            let gear = RichText::new("\u{2699}")
                .size(TITLE_SIZE * 0.75)
                .color(palette.title);
            let settings = ui.add(egui::Button::new(gear).frame(false));
            if settings.on_hover_text("Settings").clicked() {
                action_queue.request(Action::OpenSettings);
            }
        });
    });
}

fn show_dice_row(ui: &mut Ui, vm: &GameScreenViewModel) {
    let width = die::DIE_SIZE * 2.0 + DICE_SPACING;
    centered_row(ui, width, |ui| {
        for (i, die_vm) in vm.dice_vms.iter().enumerate() {
            die::show(ui, Id::new(("die", i)), die_vm);
        }
    });
}

fn centered_row(ui: &mut Ui, content_width: f32, add_contents: impl FnOnce(&mut Ui)) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = DICE_SPACING;
        // `add_space` is followed by one more item gap.
        let margin = ((ui.available_width() - content_width) / 2.0 - DICE_SPACING).max(0.0);
        ui.add_space(margin);
        add_contents(ui);
    });
}
