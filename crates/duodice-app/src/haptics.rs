//! Desktop stand-in for the vibrator.
//!
//! There is no vibration motor on desktop or web, so pulses are logged and
//! handed to the UI, which may render them as a short border flash.

use std::{cell::Cell, rc::Rc};

use duodice_game::{HapticPulse, Haptics};

#[derive(Debug)]
pub struct LogHaptics {
    pending: Rc<Cell<Option<HapticPulse>>>,
}

impl LogHaptics {
    /// Creates the haptics sink and the receiver the UI polls each frame.
    #[must_use]
    pub fn new() -> (Self, PulseReceiver) {
        let pending = Rc::new(Cell::new(None));
        let receiver = PulseReceiver {
            pending: Rc::clone(&pending),
        };
        (Self { pending }, receiver)
    }
}

impl Haptics for LogHaptics {
    fn pulse(&mut self, pulse: HapticPulse) {
        log::trace!(
            "haptic pulse: {}ms at amplitude {}",
            pulse.duration.as_millis(),
            pulse.amplitude
        );
        self.pending.set(Some(pulse));
    }
}

#[derive(Debug)]
pub struct PulseReceiver {
    pending: Rc<Cell<Option<HapticPulse>>>,
}

impl PulseReceiver {
    /// Takes the most recent pulse not yet seen by the UI.
    pub fn take(&self) -> Option<HapticPulse> {
        self.pending.take()
    }
}
