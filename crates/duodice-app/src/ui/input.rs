use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(key: Key, command: bool, action: Action) -> Self {
        Self {
            trigger: Trigger { key, command },
            action,
        }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(key, true, action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(key, false, action)
    }
}

static SHORTCUTS: [Shortcut; 5] = [
    Shortcut::command(Key::Comma, Action::OpenSettings),
    Shortcut::plain(Key::R, Action::RollDice),
    Shortcut::plain(Key::Enter, Action::RollDice),
    Shortcut::plain(Key::Space, Action::ToggleVisibility),
    Shortcut::plain(Key::H, Action::ToggleVisibility),
];

/// Shortcuts active while the settings window is open.
static SETTINGS_SHORTCUTS: [Shortcut; 1] = [Shortcut::plain(Key::Escape, Action::CloseSettings)];

pub(crate) fn handle_input(
    i: &InputState,
    settings_open: bool,
    action_queue: &mut ActionRequestQueue,
) {
    let shortcuts: &[Shortcut] = if settings_open {
        &SETTINGS_SHORTCUTS
    } else {
        &SHORTCUTS
    };

    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in shortcuts {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command;

        if triggered {
            action_queue.request(shortcut.action.clone());
            return;
        }
    }
}
