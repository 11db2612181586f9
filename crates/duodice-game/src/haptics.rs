use std::{cell::RefCell, fmt::Debug, rc::Rc, time::Duration};

/// A single haptic feedback request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HapticPulse {
    /// How long the pulse lasts.
    pub duration: Duration,
    /// Strength in the platform's 1-255 scale.
    pub amplitude: u8,
}

impl HapticPulse {
    /// The short buzz emitted on every roll.
    pub const ROLL: Self = Self {
        duration: Duration::from_millis(100),
        amplitude: 10,
    };
}

/// Receiver of haptic feedback.
///
/// Pulses are fire-and-forget: implementations must not fail and their
/// outcome never affects game state.
pub trait Haptics: Debug {
    /// Emits `pulse`.
    fn pulse(&mut self, pulse: HapticPulse);
}

impl<H> Haptics for Box<H>
where
    H: Haptics + ?Sized,
{
    fn pulse(&mut self, pulse: HapticPulse) {
        (**self).pulse(pulse);
    }
}

/// Discards every pulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self, _pulse: HapticPulse) {}
}

/// Records pulses into a shared log.
///
/// Clones share the same log, so a test can keep one handle and pass the
/// other to a [`DiceGame`](crate::DiceGame).
#[derive(Debug, Clone, Default)]
pub struct RecordingHaptics {
    pulses: Rc<RefCell<Vec<HapticPulse>>>,
}

impl RecordingHaptics {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pulses recorded so far.
    #[must_use]
    pub fn pulses(&self) -> Vec<HapticPulse> {
        self.pulses.borrow().clone()
    }
}

impl Haptics for RecordingHaptics {
    fn pulse(&mut self, pulse: HapticPulse) {
        self.pulses.borrow_mut().push(pulse);
    }
}
