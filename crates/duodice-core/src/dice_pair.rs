use crate::DieFace;

/// The result of rolling two dice, with the larger face first.
///
/// # Examples
///
/// ```
/// use duodice_core::{DicePair, DieFace};
///
/// let pair = DicePair::ordered(DieFace::D3, DieFace::D5);
/// assert_eq!(pair.high(), DieFace::D5);
/// assert_eq!(pair.low(), DieFace::D3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DicePair {
    high: DieFace,
    low: DieFace,
}

impl DicePair {
    /// Builds a pair from two draws, putting the larger face first.
    ///
    /// Equal draws keep their draw order.
    #[must_use]
    pub fn ordered(first: DieFace, second: DieFace) -> Self {
        if second > first {
            Self {
                high: second,
                low: first,
            }
        } else {
            Self {
                high: first,
                low: second,
            }
        }
    }

    /// The larger face.
    #[must_use]
    pub const fn high(self) -> DieFace {
        self.high
    }

    /// The smaller face.
    #[must_use]
    pub const fn low(self) -> DieFace {
        self.low
    }

    /// Sum of both faces (2-12).
    #[must_use]
    pub const fn total(self) -> u8 {
        self.high.value() + self.low.value()
    }

    /// Returns `true` if both faces show the same value.
    #[must_use]
    pub fn is_double(self) -> bool {
        self.high == self.low
    }
}
