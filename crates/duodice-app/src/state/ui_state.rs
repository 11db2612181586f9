use duodice_game::HapticPulse;
use rand::RngExt as _;

use crate::{haptics::PulseReceiver, ui::theme::GRADIENT_PAIRS};

// UiState holds ephemeral presentation state (background, settings window, buzz).
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) background: BackgroundState,
    pub(crate) settings_open: bool,
    pub(crate) buzz: Option<BuzzState>,
    pub(crate) pulses: PulseReceiver,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(pulses: PulseReceiver) -> Self {
        Self {
            background: BackgroundState::default(),
            settings_open: false,
            buzz: None,
            pulses,
        }
    }

    /// Starts a visual buzz for a pulse emitted at `now` (seconds).
    pub(crate) fn start_buzz(&mut self, pulse: HapticPulse, now: f64) {
        self.buzz = Some(BuzzState {
            started_at: now,
            duration: pulse.duration.as_secs_f64(),
        });
    }

    /// Returns the buzz strength in `0.0..=1.0` at `now`, clearing it once
    /// it has faded out.
    pub(crate) fn buzz_intensity(&mut self, now: f64) -> f32 {
        let Some(buzz) = self.buzz else {
            return 0.0;
        };
        let intensity = buzz.intensity(now);
        if intensity <= 0.0 {
            self.buzz = None;
        }
        intensity
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BuzzState {
    pub(crate) started_at: f64,
    pub(crate) duration: f64,
}

impl BuzzState {
    #[expect(clippy::cast_possible_truncation)]
    fn intensity(self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let elapsed = (now - self.started_at).max(0.0);
        (1.0 - elapsed / self.duration).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BackgroundState {
    pub(crate) index: usize,
}

impl BackgroundState {
    /// Moves to a different gradient chosen at random.
    pub(crate) fn shuffle(&mut self) {
        let offset = rand::rng().random_range(1..GRADIENT_PAIRS.len());
        self.index = (self.index + offset) % GRADIENT_PAIRS.len();
    }
}
