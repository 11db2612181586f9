use duodice_core::{DicePair, DieFace};

/// State of the dice screen.
///
/// Both dice are either absent (nothing rolled yet) or present together,
/// and after a roll the first die is never smaller than the second.
/// The record is `Copy`; transitions return a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiceGameState {
    dice: Option<DicePair>,
    visible: bool,
}

impl DiceGameState {
    /// Creates the initial state: no dice, hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dice: None,
            visible: false,
        }
    }

    #[cfg(test)]
    pub(crate) const fn from_parts(dice: Option<DicePair>, visible: bool) -> Self {
        Self { dice, visible }
    }

    /// The larger die, if rolled.
    #[must_use]
    pub fn die1(&self) -> Option<DieFace> {
        self.dice.map(DicePair::high)
    }

    /// The smaller die, if rolled.
    #[must_use]
    pub fn die2(&self) -> Option<DieFace> {
        self.dice.map(DicePair::low)
    }

    /// Both dice, if rolled.
    #[must_use]
    pub const fn dice(&self) -> Option<DicePair> {
        self.dice
    }

    /// Returns `true` once the dice have been rolled at least once.
    #[must_use]
    pub const fn has_rolled(&self) -> bool {
        self.dice.is_some()
    }

    /// Whether the dice values are shown.
    ///
    /// This is only the flag; before the first roll there is nothing to show
    /// even when it is `true`. See [`Self::revealed`].
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The dice as they should be displayed: `None` when masked or not rolled.
    #[must_use]
    pub fn revealed(&self) -> Option<DicePair> {
        self.dice.filter(|_| self.visible)
    }

    /// Applies a roll with the two raw draws and reveals the result.
    #[must_use]
    pub fn rolled(self, first: DieFace, second: DieFace) -> Self {
        Self {
            dice: Some(DicePair::ordered(first, second)),
            visible: true,
        }
    }

    /// Flips the visibility flag, keeping the dice.
    #[must_use]
    pub fn toggled_visibility(self) -> Self {
        Self {
            visible: !self.visible,
            ..self
        }
    }
}
