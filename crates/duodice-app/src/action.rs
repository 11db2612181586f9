use std::mem;

use crate::state::Settings;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    RollDice,
    ToggleVisibility,
    OpenSettings,
    CloseSettings,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_in_order_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::RollDice);
        queue.request(Action::ToggleVisibility);

        assert!(!queue.is_empty());
        let drained = queue.take_all();
        assert_eq!(drained, [Action::RollDice, Action::ToggleVisibility]);

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
        assert!(queue.is_empty());
    }
}
