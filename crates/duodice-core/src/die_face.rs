//! Die face representation.

use std::fmt::{self, Display};

use crate::PipSet;

/// A die face value in the range 1-6.
///
/// Each variant corresponds to exactly one face, so an out-of-range value
/// can never be stored.
///
/// # Examples
///
/// ```
/// use duodice_core::DieFace;
///
/// let face = DieFace::D5;
/// assert_eq!(face.value(), 5);
///
/// let face = DieFace::from_value(3);
/// assert_eq!(face, DieFace::D3);
///
/// assert!(DieFace::try_from(7_u8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DieFace {
    /// One pip.
    D1 = 1,
    /// Two pips.
    D2 = 2,
    /// Three pips.
    D3 = 3,
    /// Four pips.
    D4 = 4,
    /// Five pips.
    D5 = 5,
    /// Six pips.
    D6 = 6,
}

/// Error returned when converting a number outside 1-6 into a [`DieFace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid die face value: {_0}")]
pub struct InvalidDieFace(#[error(not(source))] pub u8);

impl DieFace {
    /// All faces in ascending order.
    pub const ALL: [Self; 6] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5, Self::D6];

    /// Creates a face from a value in the range 1-6.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-6.
    ///
    /// ```should_panic
    /// use duodice_core::DieFace;
    ///
    /// let _ = DieFace::from_value(0);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from(value) {
            Ok(face) => face,
            Err(_) => panic!("Invalid die face value: {value}"),
        }
    }

    /// Returns the numeric value of this face (1-6).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the canonical pip layout for this face.
    ///
    /// # Examples
    ///
    /// ```
    /// use duodice_core::{DieFace, PipSet};
    ///
    /// assert_eq!(DieFace::D1.pips(), PipSet::CENTER);
    /// assert_eq!(DieFace::D6.pips().len(), 6);
    /// ```
    #[must_use]
    pub const fn pips(self) -> PipSet {
        match self {
            Self::D1 => PipSet::CENTER,
            Self::D2 => PipSet::BOTTOM_LEFT.union(PipSet::TOP_RIGHT),
            Self::D3 => PipSet::BOTTOM_LEFT
                .union(PipSet::CENTER)
                .union(PipSet::TOP_RIGHT),
            Self::D4 => PipSet::CORNERS,
            Self::D5 => PipSet::CORNERS.union(PipSet::CENTER),
            Self::D6 => PipSet::COLUMNS,
        }
    }
}

impl TryFrom<u8> for DieFace {
    type Error = InvalidDieFace;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let face = match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            _ => return Err(InvalidDieFace(value)),
        };
        Ok(face)
    }
}

impl From<DieFace> for u8 {
    fn from(face: DieFace) -> u8 {
        face.value()
    }
}

impl Display for DieFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
