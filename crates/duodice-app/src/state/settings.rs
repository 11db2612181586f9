#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) haptics: HapticsSettings,
    pub(crate) appearance: AppearanceSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HapticsSettings {
    /// Flash the die borders when a roll emits a haptic pulse.
    pub(crate) visual_buzz: bool,
}

impl Default for HapticsSettings {
    fn default() -> Self {
        Self { visual_buzz: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppearanceSettings {
    /// Pick a new background gradient when the rolled values change.
    pub(crate) shuffle_background: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            shuffle_background: true,
        }
    }
}
